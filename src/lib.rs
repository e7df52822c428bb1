//! This crate provides tools for simulating discrete-time binary threshold networks in Rust.
//!
//! A network is made of neurons, each with a binary activation and a real threshold, and of weighted
//! directed connections. At every tick, each neuron sums the weights of the connections coming from
//! active neurons and becomes active iff this received signal reaches its threshold. All neurons are
//! updated synchronously.
//!
//! # Creating Cases
//!
//! ## From Scratch
//!
//! ```rust
//! use threshold_net::case::Case;
//! use threshold_net::connection::Connection;
//!
//! // Two neurons, the first one active, connected 1 -> 2, run for one tick
//! let case = Case::build(vec![1, 0], vec![0.5, 0.5], 1, vec![Connection::new(1, 2, 0.5)]).unwrap();
//!
//! assert_eq!(case.num_neurons(), 2);
//! assert_eq!(case.connections().len(), 1);
//! ```
//!
//! ## From Text
//!
//! ```rust
//! use threshold_net::case::Case;
//!
//! let case: Case = "2\n1 0\n0.5 0.5\n1\n1 2 0.5\nE\n".parse().unwrap();
//! assert_eq!(case.num_steps(), 1);
//! ```
//!
//! ## At Random
//!
//! ```rust
//! use threshold_net::sampler::CaseSampler;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // A random case with 277 neurons sending 3 connections each
//! let mut rng = StdRng::seed_from_u64(42);
//! let sampler = CaseSampler::build(277, 3, (-0.1, 0.1), 0.1, 0.05, 10).unwrap();
//! let case = sampler.sample(&mut rng).unwrap();
//!
//! assert_eq!(case.num_neurons(), 277);
//! assert_eq!(case.connections().len(), 831);
//! ```
//!
//! # Simulating Cases
//!
//! ```rust
//! use threshold_net::case::Case;
//! use threshold_net::harness::compare;
//! use threshold_net::simulator::{run, SimulationProgram};
//! use threshold_net::stepper::BaselineStepper;
//!
//! let case = Case::demo();
//!
//! // With a single rule
//! let mut stepper = BaselineStepper::build(case.connections(), case.thresholds()).unwrap();
//! let program = SimulationProgram::build(case.num_steps(), None).unwrap();
//! let final_state = run(&mut stepper, case.initial_state(), &program).unwrap();
//!
//! // With both rules, checking they agree
//! let comparison = compare(&case, None).unwrap();
//! assert!(comparison.matches);
//! assert_eq!(comparison.baseline, final_state);
//! ```

pub mod adjacency;
pub mod case;
pub mod connection;
pub mod error;
pub mod harness;
pub mod sampler;
pub mod simulator;
pub mod state;
pub mod stepper;
