//! Sampler module with utilities for generating random cases, e.g., for benchmarking.
//!
//! Every neuron sends the same number of connections to targets drawn uniformly at random, with
//! weights drawn uniformly in a range. All neurons share the same threshold and each one is
//! initially active with a given probability.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Uniform};

use crate::case::Case;
use crate::connection::Connection;
use crate::error::NetError;

#[derive(Debug, PartialEq, Clone)]
pub struct CaseSampler {
    /// the number of neurons in the network
    num_neurons: usize,
    /// the number of outputs of each neuron
    out_degree: usize,
    /// the weights are drawn uniformly in [min, max)
    lim_weights: (f64, f64),
    /// the probability for a neuron to be initially active
    activity: f64,
    /// the threshold shared by all neurons
    threshold: f64,
    /// the number of ticks to simulate
    num_steps: usize,
}

impl CaseSampler {
    /// Create a new CaseSampler instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use threshold_net::sampler::CaseSampler;
    /// let sampler = CaseSampler::build(10, 3, (0.0, 1.0), 0.1, 0.5, 20).unwrap();
    /// assert_eq!(sampler.num_connections(), 30);
    /// ```
    pub fn build(
        num_neurons: usize,
        out_degree: usize,
        lim_weights: (f64, f64),
        activity: f64,
        threshold: f64,
        num_steps: usize,
    ) -> Result<Self, NetError> {
        if num_neurons.checked_mul(out_degree).is_none() {
            return Err(NetError::InvalidParameters(format!(
                "{} neurons with {} outputs each exceed the maximum number of connections.",
                num_neurons, out_degree
            )));
        }

        if !(lim_weights.0 < lim_weights.1) {
            return Err(NetError::InvalidParameters(
                "The minimum weight must be less than the maximum weight.".into(),
            ));
        }

        if !(0.0..=1.0).contains(&activity) {
            return Err(NetError::InvalidParameters(
                "The activity must be a probability.".into(),
            ));
        }

        Ok(CaseSampler {
            num_neurons,
            out_degree,
            lim_weights,
            activity,
            threshold,
            num_steps,
        })
    }

    /// Returns the number of neurons of the sampled cases.
    pub fn num_neurons(&self) -> usize {
        self.num_neurons
    }

    /// Returns the number of connections of the sampled cases.
    pub fn num_connections(&self) -> usize {
        // Cannot overflow, checked on construction.
        self.num_neurons * self.out_degree
    }

    /// Returns the number of ticks of the sampled cases.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Sample a case from the distribution.
    /// Connections are listed by source, the outputs of neuron 1 first.
    ///
    /// # Examples
    ///
    /// ```
    /// use threshold_net::sampler::CaseSampler;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let sampler = CaseSampler::build(10, 3, (0.0, 1.0), 0.1, 0.5, 20).unwrap();
    /// let case = sampler.sample(&mut rng).unwrap();
    /// assert_eq!(case.num_neurons(), 10);
    /// assert_eq!(case.connections().len(), 30);
    /// ```
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Case, NetError> {
        let weight_dist = Uniform::new(self.lim_weights.0, self.lim_weights.1);
        let connections: Vec<Connection> = (0..self.num_connections())
            .map(|i| {
                let src = i / self.out_degree;
                let tgt = rng.gen_range(0..self.num_neurons);
                Connection::new(src + 1, tgt + 1, weight_dist.sample(rng))
            })
            .collect();

        let activity_dist = Bernoulli::new(self.activity)
            .map_err(|e| NetError::InvalidParameters(format!("Invalid activity: {}", e)))?;
        let initial: Vec<u8> = (0..self.num_neurons)
            .map(|_| u8::from(activity_dist.sample(rng)))
            .collect();

        Case::build(
            initial,
            vec![self.threshold; self.num_neurons],
            self.num_steps,
            connections,
        )
    }
}
