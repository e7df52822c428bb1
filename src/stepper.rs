//! One-tick update rules of a threshold network.
//!
//! Every tick has two phases. First, the signal received by each neuron is accumulated from the
//! activations of the previous tick. Then, every neuron whose received signal reaches its threshold
//! becomes active, all the others inactive. No activation is overwritten before the first phase
//! is over, so that all neurons are updated synchronously.
//!
//! Two rules are provided and always agree on the resulting activations:
//! - [`BaselineStepper`] scans every connection on every tick;
//! - [`FastStepper`] only scans the aggregated out-edges of the active neurons.
//!
//! # Example
//! ```rust
//! use threshold_net::connection::Connection;
//! use threshold_net::state::NetworkState;
//! use threshold_net::stepper::{BaselineStepper, FastStepper, Stepper};
//!
//! let connections = vec![Connection::new(1, 2, 0.5)];
//! let thresholds = vec![0.5, 0.5];
//!
//! let mut baseline = BaselineStepper::build(&connections, &thresholds).unwrap();
//! let mut state = NetworkState::build(vec![1, 0]).unwrap();
//! baseline.step(&mut state);
//! assert_eq!(state.activations(), &[0, 1]);
//!
//! let mut fast = FastStepper::build(&connections, &thresholds).unwrap();
//! let mut state = NetworkState::build(vec![1, 0]).unwrap();
//! fast.step(&mut state);
//! assert_eq!(state.activations(), &[0, 1]);
//! ```
use derivative::Derivative;

use crate::adjacency::Adjacency;
use crate::connection::{check_all_bounds, Connection};
use crate::error::NetError;
use crate::state::NetworkState;

/// A rule advancing a network state by one tick.
pub trait Stepper {
    /// A short name identifying the rule.
    fn name(&self) -> &'static str;

    /// The number of neurons the rule operates on.
    fn num_neurons(&self) -> usize;

    /// Advance the state by one tick.
    ///
    /// # Panics
    ///
    /// Panics if the state does not have exactly [`Stepper::num_neurons`] neurons. The simulation
    /// driver checks the sizes once and returns an error instead.
    fn step(&mut self, state: &mut NetworkState);

    /// The signal received by each neuron during the last tick (all zeros before the first one).
    fn received(&self) -> &[f64];
}

fn assert_size<S: Stepper>(stepper: &S, state: &NetworkState) {
    assert_eq!(
        state.num_neurons(),
        stepper.num_neurons(),
        "the {} rule cannot step a state of another size",
        stepper.name()
    );
}

/// The update rule scanning all connections, in input order, on every tick.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct BaselineStepper<'a> {
    connections: &'a [Connection],
    thresholds: &'a [f64],
    #[derivative(Debug = "ignore")]
    received: Vec<f64>,
}

impl<'a> BaselineStepper<'a> {
    /// Create a baseline rule for a network with one neuron per threshold.
    /// Returns an error if a connection refers to a neuron out of the network.
    pub fn build(connections: &'a [Connection], thresholds: &'a [f64]) -> Result<Self, NetError> {
        check_all_bounds(connections, thresholds.len())?;
        Ok(BaselineStepper {
            connections,
            thresholds,
            received: vec![0.0; thresholds.len()],
        })
    }
}

impl Stepper for BaselineStepper<'_> {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn num_neurons(&self) -> usize {
        self.thresholds.len()
    }

    fn step(&mut self, state: &mut NetworkState) {
        assert_size(&*self, state);
        self.received.fill(0.0);
        for connection in self.connections {
            let (source, target) = connection.indices();
            if state.is_active(source) {
                self.received[target] += connection.weight();
            }
        }
        log::trace!(
            "[{}] {} active, received {:?}",
            self.name(),
            state.num_active(),
            self.received
        );
        state.commit(&self.received, self.thresholds);
    }

    fn received(&self) -> &[f64] {
        &self.received
    }
}

/// The update rule scanning only the aggregated out-edges of the active neurons.
///
/// The per-tick cost is proportional to the total out-degree of the active neurons, independently of
/// the connections leaving inactive ones.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct FastStepper<'a> {
    adjacency: Adjacency,
    thresholds: &'a [f64],
    #[derivative(Debug = "ignore")]
    received: Vec<f64>,
}

impl<'a> FastStepper<'a> {
    /// Create a fast rule for a network with one neuron per threshold, aggregating the connections once.
    /// Returns an error if a connection refers to a neuron out of the network.
    pub fn build(connections: &[Connection], thresholds: &'a [f64]) -> Result<Self, NetError> {
        let adjacency = Adjacency::build(thresholds.len(), connections)?;
        Self::from_adjacency(adjacency, thresholds)
    }

    /// Create a fast rule from an already aggregated adjacency.
    /// Returns an error if the adjacency and the thresholds disagree on the number of neurons.
    pub fn from_adjacency(adjacency: Adjacency, thresholds: &'a [f64]) -> Result<Self, NetError> {
        if adjacency.num_neurons() != thresholds.len() {
            return Err(NetError::InvalidParameters(format!(
                "adjacency has {} neurons but {} thresholds were provided",
                adjacency.num_neurons(),
                thresholds.len()
            )));
        }
        Ok(FastStepper {
            adjacency,
            thresholds,
            received: vec![0.0; thresholds.len()],
        })
    }

    /// Returns the aggregated adjacency.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }
}

impl Stepper for FastStepper<'_> {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn num_neurons(&self) -> usize {
        self.thresholds.len()
    }

    fn step(&mut self, state: &mut NetworkState) {
        assert_size(&*self, state);
        self.received.fill(0.0);
        for source in state.active_indices() {
            for (target, weight) in self.adjacency.out_edges(source) {
                self.received[target] += weight;
            }
        }
        log::trace!(
            "[{}] {} active, received {:?}",
            self.name(),
            state.num_active(),
            self.received
        );
        state.commit(&self.received, self.thresholds);
    }

    fn received(&self) -> &[f64] {
        &self.received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_both(
        connections: &[Connection],
        thresholds: &[f64],
        activations: Vec<u8>,
    ) -> (NetworkState, NetworkState) {
        let mut baseline = BaselineStepper::build(connections, thresholds).unwrap();
        let mut fast = FastStepper::build(connections, thresholds).unwrap();
        let mut baseline_state = NetworkState::build(activations.clone()).unwrap();
        let mut fast_state = NetworkState::build(activations).unwrap();
        baseline.step(&mut baseline_state);
        fast.step(&mut fast_state);
        (baseline_state, fast_state)
    }

    #[test]
    fn test_threshold_equality_activates() {
        let connections = vec![Connection::new(1, 2, 0.5)];
        let (baseline, fast) = step_both(&connections, &[0.5, 0.5], vec![1, 0]);
        assert_eq!(baseline.activations(), &[0, 1]);
        assert_eq!(fast, baseline);
    }

    #[test]
    fn test_zero_threshold_without_input() {
        let (baseline, fast) = step_both(&[], &[0.0], vec![0]);
        assert_eq!(baseline.activations(), &[1]);
        assert_eq!(fast, baseline);
    }

    #[test]
    fn test_inactive_source_contributes_nothing() {
        let connections = vec![Connection::new(1, 2, 100.0), Connection::new(3, 2, 0.25)];
        let (baseline, fast) = step_both(&connections, &[1.0, 0.5, 1.0], vec![0, 0, 1]);
        assert_eq!(baseline.activations(), &[0, 0, 0]);
        assert_eq!(fast, baseline);
    }

    #[test]
    fn test_negative_weights_inhibit() {
        let connections = vec![Connection::new(1, 3, 1.0), Connection::new(2, 3, -0.75)];
        let (baseline, fast) = step_both(&connections, &[1.0, 1.0, 0.5], vec![1, 1, 0]);
        assert_eq!(baseline.activations(), &[0, 0, 0]);
        assert_eq!(fast, baseline);

        let (baseline, fast) = step_both(&connections, &[1.0, 1.0, 0.5], vec![1, 0, 0]);
        assert_eq!(baseline.activations(), &[0, 0, 1]);
        assert_eq!(fast, baseline);
    }

    #[test]
    fn test_synchronous_update() {
        // A chain 1 -> 2 -> 3: only the direct successor of an active neuron lights up.
        let connections = vec![Connection::new(1, 2, 1.0), Connection::new(2, 3, 1.0)];
        let (baseline, fast) = step_both(&connections, &[1.0, 1.0, 1.0], vec![1, 0, 0]);
        assert_eq!(baseline.activations(), &[0, 1, 0]);
        assert_eq!(fast, baseline);

        // Swapped edge order must not matter either.
        let connections = vec![Connection::new(2, 3, 1.0), Connection::new(1, 2, 1.0)];
        let (baseline, fast) = step_both(&connections, &[1.0, 1.0, 1.0], vec![1, 0, 0]);
        assert_eq!(baseline.activations(), &[0, 1, 0]);
        assert_eq!(fast, baseline);
    }

    #[test]
    fn test_duplicate_connections_add_up() {
        let split = vec![Connection::new(1, 2, 0.25), Connection::new(1, 2, 0.25)];
        let merged = vec![Connection::new(1, 2, 0.5)];
        let thresholds = [1.0, 0.5];

        let mut fast_split = FastStepper::build(&split, &thresholds).unwrap();
        let mut fast_merged = FastStepper::build(&merged, &thresholds).unwrap();
        let mut split_state = NetworkState::build(vec![1, 0]).unwrap();
        let mut merged_state = NetworkState::build(vec![1, 0]).unwrap();
        fast_split.step(&mut split_state);
        fast_merged.step(&mut merged_state);

        assert_eq!(split_state, merged_state);
        assert_eq!(fast_split.received(), fast_merged.received());
        assert_eq!(fast_split.received(), &[0.0, 0.5]);
    }

    #[test]
    fn test_received_signal() {
        let connections = vec![
            Connection::new(1, 2, 0.5),
            Connection::new(1, 3, 0.25),
            Connection::new(2, 3, 4.0),
        ];
        let thresholds = [1.0, 1.0, 1.0];
        let mut baseline = BaselineStepper::build(&connections, &thresholds).unwrap();
        assert_eq!(baseline.received(), &[0.0, 0.0, 0.0]);

        let mut state = NetworkState::build(vec![1, 0, 0]).unwrap();
        baseline.step(&mut state);
        assert_eq!(baseline.received(), &[0.0, 0.5, 0.25]);
    }

    #[test]
    fn test_build_errors() {
        let connections = vec![Connection::new(1, 3, 1.0)];
        assert!(matches!(
            BaselineStepper::build(&connections, &[0.5, 0.5]),
            Err(NetError::OutOfBounds(_))
        ));
        assert!(matches!(
            FastStepper::build(&connections, &[0.5, 0.5]),
            Err(NetError::OutOfBounds(_))
        ));

        let adjacency = Adjacency::build(3, &connections).unwrap();
        assert!(matches!(
            FastStepper::from_adjacency(adjacency, &[0.5, 0.5]),
            Err(NetError::InvalidParameters(_))
        ));
    }

    #[test]
    #[should_panic(expected = "the baseline rule cannot step a state of another size")]
    fn test_baseline_step_size_mismatch() {
        let thresholds = [0.5, 0.5];
        let mut baseline = BaselineStepper::build(&[], &thresholds).unwrap();
        baseline.step(&mut NetworkState::inactive(3));
    }

    #[test]
    #[should_panic(expected = "the fast rule cannot step a state of another size")]
    fn test_fast_step_size_mismatch() {
        let thresholds = [0.5, 0.5, 0.5];
        let mut fast = FastStepper::build(&[], &thresholds).unwrap();
        fast.step(&mut NetworkState::inactive(2));
    }
}
