//! Equivalence harness: run a case with both update rules and compare the outcomes.
//!
//! # Example
//! ```rust
//! use threshold_net::case::Case;
//! use threshold_net::harness::compare;
//!
//! let comparison = compare(&Case::demo(), None).unwrap();
//! assert!(comparison.matches);
//! ```
use std::time::{Duration, Instant};

use crate::case::Case;
use crate::error::NetError;
use crate::simulator::{run, SimulationProgram};
use crate::state::NetworkState;
use crate::stepper::{BaselineStepper, FastStepper};

/// The outcome of running a case with both update rules.
#[derive(Debug, PartialEq, Clone)]
pub struct Comparison {
    /// Final state of the baseline rule.
    pub baseline: NetworkState,
    /// Final state of the fast rule.
    pub fast: NetworkState,
    /// Whether both final states are identical.
    pub matches: bool,
    /// Wall-clock duration of the baseline run.
    pub baseline_elapsed: Duration,
    /// Wall-clock duration of the fast run, including the aggregation of the connections.
    pub fast_elapsed: Duration,
}

impl Comparison {
    /// How many times faster the fast rule was (infinite if it took no measurable time).
    pub fn speedup(&self) -> f64 {
        self.baseline_elapsed.as_secs_f64() / self.fast_elapsed.as_secs_f64()
    }
}

/// Run the case once with each rule, each from its own copy of the initial state, and compare the
/// final states. Snapshots are taken every `snapshot_every` ticks if provided.
pub fn compare(case: &Case, snapshot_every: Option<usize>) -> Result<Comparison, NetError> {
    let program = SimulationProgram::build(case.num_steps(), snapshot_every)?;

    let start = Instant::now();
    let mut baseline_stepper = BaselineStepper::build(case.connections(), case.thresholds())?;
    let baseline = run(&mut baseline_stepper, case.initial_state(), &program)?;
    let baseline_elapsed = start.elapsed();

    let start = Instant::now();
    let mut fast_stepper = FastStepper::build(case.connections(), case.thresholds())?;
    let fast = run(&mut fast_stepper, case.initial_state(), &program)?;
    let fast_elapsed = start.elapsed();

    let matches = baseline == fast;
    log::info!(
        "{} neurons, {} connections, {} ticks: match={} baseline={:.6}s fast={:.6}s",
        case.num_neurons(),
        case.connections().len(),
        case.num_steps(),
        matches,
        baseline_elapsed.as_secs_f64(),
        fast_elapsed.as_secs_f64()
    );
    if !matches {
        log::warn!("baseline {} differs from fast {}", baseline, fast);
    }

    Ok(Comparison {
        baseline,
        fast,
        matches,
        baseline_elapsed,
        fast_elapsed,
    })
}
