//! The activation vector of a network.
use std::fmt;

use itertools::Itertools;

use crate::error::NetError;

/// The binary activation of every neuron in a network, index `i` holding neuron `i + 1`.
///
/// A state is only ever replaced as a whole: steppers compute the signal received by every neuron
/// from the current activations before any activation is overwritten.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NetworkState {
    activations: Vec<u8>,
}

impl NetworkState {
    /// Create a state from a vector of activations.
    /// Returns an error if any activation is neither 0 nor 1.
    pub fn build(activations: Vec<u8>) -> Result<Self, NetError> {
        if let Some((i, &a)) = activations.iter().find_position(|&&a| a > 1) {
            return Err(NetError::InvalidParameters(format!(
                "activation of neuron {} must be 0 or 1, got {}",
                i + 1,
                a
            )));
        }
        Ok(NetworkState { activations })
    }

    /// Activations must be 0 or 1.
    pub(crate) fn from_valid(activations: Vec<u8>) -> Self {
        debug_assert!(activations.iter().all(|&a| a <= 1));
        NetworkState { activations }
    }

    /// Create a state with all `num_neurons` neurons inactive.
    pub fn inactive(num_neurons: usize) -> Self {
        NetworkState {
            activations: vec![0; num_neurons],
        }
    }

    /// Returns the number of neurons.
    pub fn num_neurons(&self) -> usize {
        self.activations.len()
    }

    /// Returns whether the neuron at (0-based) `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.activations[index] == 1
    }

    /// Returns the number of active neurons.
    pub fn num_active(&self) -> usize {
        self.activations.iter().filter(|&&a| a == 1).count()
    }

    /// An iterator over the (0-based) indices of the active neurons.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.activations.iter().positions(|&a| a == 1)
    }

    /// Returns a slice of the activations.
    pub fn activations(&self) -> &[u8] {
        &self.activations
    }

    /// Overwrite every activation from the received signal and the thresholds.
    /// A neuron is active iff its received signal reaches its threshold (`received >= threshold`).
    pub(crate) fn commit(&mut self, received: &[f64], thresholds: &[f64]) {
        for ((activation, &signal), &threshold) in self
            .activations
            .iter_mut()
            .zip(received.iter())
            .zip(thresholds.iter())
        {
            *activation = u8::from(signal >= threshold);
        }
    }

    /// Consume the state and returns the plain activation vector.
    pub fn into_activations(self) -> Vec<u8> {
        self.activations
    }
}

/// Space-separated activations, e.g., `0 1 1 0`.
impl fmt::Display for NetworkState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.activations.iter().join(" "))
    }
}
