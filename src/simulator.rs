//! Simulation driver: advance a network state over a fixed number of ticks.
//!
//! # Example
//! ```rust
//! use threshold_net::case::Case;
//! use threshold_net::simulator::{run, SimulationProgram};
//! use threshold_net::stepper::FastStepper;
//!
//! let case = Case::demo();
//! let mut stepper = FastStepper::build(case.connections(), case.thresholds()).unwrap();
//! let program = SimulationProgram::build(case.num_steps(), None).unwrap();
//!
//! let final_state = run(&mut stepper, case.initial_state(), &program).unwrap();
//! assert_eq!(final_state.num_neurons(), 9);
//! ```

use crate::error::NetError;
use crate::state::NetworkState;
use crate::stepper::Stepper;

/// What to run: how many ticks, and how often to take a snapshot.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SimulationProgram {
    num_steps: usize,
    snapshot_every: Option<usize>,
}

impl SimulationProgram {
    /// Create a new program of `num_steps` ticks, with a snapshot every `snapshot_every` ticks if provided.
    /// Returns an error if the snapshot period is zero.
    pub fn build(num_steps: usize, snapshot_every: Option<usize>) -> Result<Self, NetError> {
        if snapshot_every == Some(0) {
            return Err(NetError::InvalidParameters(
                "Snapshot period must be positive".to_string(),
            ));
        }
        Ok(SimulationProgram {
            num_steps,
            snapshot_every,
        })
    }

    /// Returns the number of ticks.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Returns the snapshot period, if any.
    pub fn snapshot_every(&self) -> Option<usize> {
        self.snapshot_every
    }

    fn is_snapshot_step(&self, step: usize) -> bool {
        matches!(self.snapshot_every, Some(every) if step % every == 0)
    }
}

/// The state of the network right after a given (1-based) tick.
#[derive(Debug, PartialEq)]
pub struct Snapshot<'a> {
    pub step: usize,
    pub state: &'a NetworkState,
}

/// The outcome of [`run_until_stable`].
#[derive(Debug, PartialEq, Clone)]
pub struct Stabilization {
    /// The last computed state.
    pub state: NetworkState,
    /// The number of ticks after which the state no longer changes, if observed.
    pub fixed_point: Option<usize>,
    /// The number of ticks actually run.
    pub steps_run: usize,
}

fn check_size<S: Stepper + ?Sized>(stepper: &S, state: &NetworkState) -> Result<(), NetError> {
    if stepper.num_neurons() != state.num_neurons() {
        return Err(NetError::InvalidParameters(format!(
            "the {} rule expects {} neurons but the state has {}",
            stepper.name(),
            stepper.num_neurons(),
            state.num_neurons()
        )));
    }
    Ok(())
}

/// Run the program from the given state and returns the final state.
/// Snapshots, if any, are logged.
pub fn run<S: Stepper + ?Sized>(
    stepper: &mut S,
    state: NetworkState,
    program: &SimulationProgram,
) -> Result<NetworkState, NetError> {
    run_with(stepper, state, program, |_| {})
}

/// Run the program from the given state and returns the final state.
/// Snapshots, if any, are logged and passed to the observer; observing does not alter the run.
pub fn run_with<S, F>(
    stepper: &mut S,
    mut state: NetworkState,
    program: &SimulationProgram,
    mut observer: F,
) -> Result<NetworkState, NetError>
where
    S: Stepper + ?Sized,
    F: FnMut(&Snapshot),
{
    check_size(stepper, &state)?;
    log::debug!(
        "Running {} ticks with the {} rule on {} neurons",
        program.num_steps(),
        stepper.name(),
        state.num_neurons()
    );

    for step in 1..=program.num_steps() {
        stepper.step(&mut state);
        if program.is_snapshot_step(step) {
            log::info!("STEP {:>4}: {}", step, state);
            observer(&Snapshot {
                step,
                state: &state,
            });
        }
    }

    Ok(state)
}

/// Run from the given state until it stops changing, for at most `max_steps` ticks.
pub fn run_until_stable<S: Stepper + ?Sized>(
    stepper: &mut S,
    mut state: NetworkState,
    max_steps: usize,
) -> Result<Stabilization, NetError> {
    check_size(stepper, &state)?;

    let mut previous = state.clone();
    for step in 1..=max_steps {
        stepper.step(&mut state);
        if state == previous {
            log::debug!(
                "Fixed point of the {} rule reached after {} ticks",
                stepper.name(),
                step - 1
            );
            return Ok(Stabilization {
                state,
                fixed_point: Some(step - 1),
                steps_run: step,
            });
        }
        previous.clone_from(&state);
    }

    Ok(Stabilization {
        state,
        fixed_point: None,
        steps_run: max_steps,
    })
}
