use threshold_net::case::Case;
use threshold_net::connection::Connection;
use threshold_net::harness::compare;
use threshold_net::simulator::{run, run_until_stable, SimulationProgram};
use threshold_net::state::NetworkState;
use threshold_net::stepper::{BaselineStepper, FastStepper, Stepper};

#[test]
fn test_single_neuron_without_input() {
    let case: Case = "1\n0\n0.0\n1\nE\n".parse().unwrap();
    let comparison = compare(&case, None).unwrap();
    assert!(comparison.matches);
    assert_eq!(comparison.baseline.activations(), &[1]);
}

#[test]
fn test_two_neurons_threshold_reached() {
    let case: Case = "2\n1 0\n0.5 0.5\n1\n1 2 0.5\nE\n".parse().unwrap();
    let comparison = compare(&case, None).unwrap();
    assert!(comparison.matches);
    assert_eq!(comparison.baseline.activations(), &[0, 1]);
    assert_eq!(comparison.fast.to_string(), "0 1");
}

#[test]
fn test_demo_both_rules_agree_at_every_tick() {
    let case = Case::demo();
    let mut baseline = BaselineStepper::build(case.connections(), case.thresholds()).unwrap();
    let mut fast = FastStepper::build(case.connections(), case.thresholds()).unwrap();
    let mut baseline_state = case.initial_state();
    let mut fast_state = case.initial_state();

    for _ in 0..case.num_steps() {
        baseline.step(&mut baseline_state);
        fast.step(&mut fast_state);
        assert_eq!(baseline_state, fast_state);
    }

    assert_eq!(baseline_state.activations(), &[1, 0, 1, 1, 0, 1, 1, 1, 1]);
}

#[test]
fn test_demo_settles_into_a_cycle() {
    let case = Case::demo();
    let mut stepper = FastStepper::build(case.connections(), case.thresholds()).unwrap();

    // The demo never reaches a fixed point...
    let outcome = run_until_stable(&mut stepper, case.initial_state(), case.num_steps()).unwrap();
    assert_eq!(outcome.fixed_point, None);

    // ...but comes back to its initial state every 7 ticks.
    let program = SimulationProgram::build(7, None).unwrap();
    let state = run(&mut stepper, case.initial_state(), &program).unwrap();
    assert_eq!(state, case.initial_state());

    let program = SimulationProgram::build(3, None).unwrap();
    let state = run(&mut stepper, case.initial_state(), &program).unwrap();
    assert_ne!(state, case.initial_state());
}

#[test]
fn test_reaches_fixed_point() {
    // Neuron 1 sustains itself and feeds neurons 2 and 3; neuron 4 is inhibited by neuron 3.
    let case = Case::build(
        vec![1, 0, 0, 1],
        vec![0.5, 0.5, 0.75, 0.25],
        100,
        vec![
            Connection::new(1, 1, 1.0),
            Connection::new(1, 2, 0.5),
            Connection::new(2, 3, 0.5),
            Connection::new(2, 3, 0.25),
            Connection::new(3, 4, -1.0),
            Connection::new(4, 4, 0.5),
        ],
    )
    .unwrap();

    let mut baseline = BaselineStepper::build(case.connections(), case.thresholds()).unwrap();
    let outcome = run_until_stable(&mut baseline, case.initial_state(), case.num_steps()).unwrap();
    assert_eq!(outcome.fixed_point, Some(3));
    assert_eq!(outcome.state.activations(), &[1, 1, 1, 0]);

    let comparison = compare(&case, None).unwrap();
    assert!(comparison.matches);
    assert_eq!(comparison.fast, outcome.state);
}

#[test]
fn test_zero_steps_returns_initial_state() {
    let case = Case::build(
        vec![1, 0],
        vec![5.0, 5.0],
        0,
        vec![Connection::new(1, 2, 1.0)],
    )
    .unwrap();
    let comparison = compare(&case, None).unwrap();
    assert!(comparison.matches);
    assert_eq!(comparison.baseline, NetworkState::build(vec![1, 0]).unwrap());
}
