//! Aggregated out-going adjacency of a network, in compressed sparse row layout.
//!
//! Duplicate connections are merged by summing their weights, so that each (source, target) pair
//! appears at most once. The out-edges of a source are sorted by target index.
//!
//! # Example
//! ```rust
//! use threshold_net::adjacency::Adjacency;
//! use threshold_net::connection::Connection;
//!
//! let connections = vec![
//!     Connection::new(1, 2, 0.25),
//!     Connection::new(1, 2, 0.5),
//!     Connection::new(2, 1, 1.0),
//! ];
//! let adjacency = Adjacency::build(2, &connections).unwrap();
//!
//! assert_eq!(adjacency.out_edges(0).collect::<Vec<_>>(), vec![(1, 0.75)]);
//! assert_eq!(adjacency.out_edges(1).collect::<Vec<_>>(), vec![(0, 1.0)]);
//! assert_eq!(adjacency.num_edges(), 2);
//! ```

use crate::connection::{check_all_bounds, Connection};
use crate::error::NetError;

#[derive(Debug, PartialEq, Clone)]
pub struct Adjacency {
    /// `offsets[u]..offsets[u + 1]` is the range of out-edges of source `u`.
    offsets: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f64>,
}

impl Adjacency {
    /// Aggregate the connections of a network with `num_neurons` neurons.
    /// Returns an error if a connection refers to a neuron outside [1, num_neurons].
    pub fn build(num_neurons: usize, connections: &[Connection]) -> Result<Self, NetError> {
        check_all_bounds(connections, num_neurons)?;

        let mut pairs: Vec<(usize, usize, f64)> = connections
            .iter()
            .map(|connection| {
                let (source, target) = connection.indices();
                (source, target, connection.weight())
            })
            .collect();
        // Stable: duplicates keep their input order, hence are summed in input order.
        pairs.sort_by_key(|&(source, target, _)| (source, target));

        let mut offsets = vec![0; num_neurons + 1];
        let mut targets: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut weights: Vec<f64> = Vec::with_capacity(pairs.len());
        let mut last: Option<(usize, usize)> = None;

        for (source, target, weight) in pairs {
            if last == Some((source, target)) {
                if let Some(w) = weights.last_mut() {
                    *w += weight;
                }
                continue;
            }
            targets.push(target);
            weights.push(weight);
            offsets[source + 1] += 1;
            last = Some((source, target));
        }

        for u in 0..num_neurons {
            offsets[u + 1] += offsets[u];
        }

        targets.shrink_to_fit();
        weights.shrink_to_fit();

        log::debug!(
            "Adjacency built: {} neurons, {} connections merged into {} edges",
            num_neurons,
            connections.len(),
            targets.len()
        );

        Ok(Adjacency {
            offsets,
            targets,
            weights,
        })
    }

    /// Returns the number of sources, i.e., of neurons.
    pub fn num_neurons(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of aggregated edges.
    pub fn num_edges(&self) -> usize {
        self.targets.len()
    }

    /// Returns the number of distinct targets of the (0-based) `source`.
    pub fn out_degree(&self, source: usize) -> usize {
        self.offsets[source + 1] - self.offsets[source]
    }

    /// An iterator over the (target index, summed weight) pairs of the (0-based) `source`.
    pub fn out_edges(&self, source: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.offsets[source]..self.offsets[source + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }
}
