//! Module implementing the weighted directed connections of a network.

use super::error::NetError;

/// Represents a connection between two neurons in a network.
///
/// Neuron IDs are 1-based, as in the textual case format. The same (source, target) pair may
/// appear several times; the weights of such duplicates add up.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Connection {
    source_id: usize,
    /// Target ID
    target_id: usize,
    /// Connection weight (may be negative)
    weight: f64,
}

impl Connection {
    /// Create a new connection from `source_id` to `target_id`.
    pub fn new(source_id: usize, target_id: usize, weight: f64) -> Self {
        Connection {
            source_id,
            target_id,
            weight,
        }
    }

    /// Returns the (1-based) ID of the source neuron.
    pub fn source_id(&self) -> usize {
        self.source_id
    }

    /// Returns the (1-based) ID of the target neuron.
    pub fn target_id(&self) -> usize {
        self.target_id
    }

    /// Returns the weight of the connection.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the 0-based (source, target) indices of the connection.
    pub fn indices(&self) -> (usize, usize) {
        (self.source_id - 1, self.target_id - 1)
    }

    /// Check that both endpoints refer to one of the `num_neurons` neurons, i.e., lie in [1, num_neurons].
    pub fn check_bounds(&self, num_neurons: usize) -> Result<(), NetError> {
        for id in [self.source_id, self.target_id] {
            if id == 0 || id > num_neurons {
                return Err(NetError::OutOfBounds(format!(
                    "connection {} -> {} refers to neuron {} but the network has {} neurons",
                    self.source_id, self.target_id, id, num_neurons
                )));
            }
        }
        Ok(())
    }
}

/// Check the bounds of every connection in the slice, failing on the first offending one.
pub fn check_all_bounds(connections: &[Connection], num_neurons: usize) -> Result<(), NetError> {
    connections
        .iter()
        .try_for_each(|connection| connection.check_bounds(num_neurons))
}
