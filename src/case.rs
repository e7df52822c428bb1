//! A simulation case: the network, its initial state and the number of ticks to run.
//!
//! A case is read from a line-oriented textual description:
//! ```text
//! M
//! s(1) ... s(M)
//! X(1) ... X(M)
//! N
//! a b w
//! ...
//! E
//! ```
//! where `s` are the initial activations (0 or 1), `X` the thresholds, `N` the number of ticks, and
//! each `a b w` line a connection from neuron `a` to neuron `b` (1-based) with weight `w`. Blank
//! lines among the connections are ignored; the line `E` terminates the case.
//!
//! # Example
//! ```rust
//! use threshold_net::case::Case;
//!
//! let case: Case = "2\n1 0\n0.5 0.5\n1\n1 2 0.5\nE\n".parse().unwrap();
//! assert_eq!(case.num_neurons(), 2);
//! assert_eq!(case.num_steps(), 1);
//! assert_eq!(case.connections().len(), 1);
//! ```
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;

use crate::connection::{check_all_bounds, Connection};
use crate::error::NetError;
use crate::state::NetworkState;

/// The number of ticks of the demo case.
pub const DEMO_NUM_STEPS: usize = 100;

#[derive(Debug, PartialEq, Clone)]
pub struct Case {
    /// Initial activation of each neuron.
    initial: NetworkState,
    /// Firing threshold of each neuron.
    thresholds: Vec<f64>,
    /// Number of ticks to simulate.
    num_steps: usize,
    connections: Vec<Connection>,
}

impl Case {
    /// Create a new case.
    /// Returns an error if the initial state and the thresholds do not have the same length, if an
    /// activation is neither 0 nor 1, or if a connection refers to a neuron out of the network.
    pub fn build(
        initial: Vec<u8>,
        thresholds: Vec<f64>,
        num_steps: usize,
        connections: Vec<Connection>,
    ) -> Result<Self, NetError> {
        if initial.len() != thresholds.len() {
            return Err(NetError::InvalidParameters(format!(
                "{} initial activations for {} thresholds",
                initial.len(),
                thresholds.len()
            )));
        }
        check_all_bounds(&connections, thresholds.len())?;
        Ok(Case {
            initial: NetworkState::build(initial)?,
            thresholds,
            num_steps,
            connections,
        })
    }

    /// The nine-neuron, thirteen-connection demo network, run for [`DEMO_NUM_STEPS`] ticks.
    pub fn demo() -> Self {
        Case {
            initial: NetworkState::from_valid(vec![1, 1, 1, 1, 0, 1, 1, 1, 0]),
            thresholds: vec![0.5, 0.1, 0.6, 0.5, 0.4, 0.8, 0.2, 0.2, 0.4],
            num_steps: DEMO_NUM_STEPS,
            connections: vec![
                Connection::new(4, 3, 0.8),
                Connection::new(9, 6, 0.6),
                Connection::new(8, 3, 0.4),
                Connection::new(7, 9, 0.6),
                Connection::new(4, 3, 1.0),
                Connection::new(2, 6, 0.8),
                Connection::new(1, 4, 0.8),
                Connection::new(2, 1, 0.5),
                Connection::new(4, 4, 0.1),
                Connection::new(5, 5, 0.8),
                Connection::new(3, 7, 0.5),
                Connection::new(9, 8, 0.3),
                Connection::new(8, 2, 0.6),
            ],
        }
    }

    /// Returns the number of neurons.
    pub fn num_neurons(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the number of ticks to simulate.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Returns a slice of the neuron thresholds.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns a slice of the connections, in input order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns a fresh, independently owned, copy of the initial state.
    pub fn initial_state(&self) -> NetworkState {
        self.initial.clone()
    }

    /// Read a case in textual format.
    /// Lines after the terminating `E` are left unread.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, NetError> {
        let mut lines = reader.lines().enumerate();
        let mut next_line = |what: &str| -> Result<(usize, String), NetError> {
            match lines.next() {
                Some((i, line)) => Ok((i + 1, line?)),
                None => Err(NetError::ParseError(format!("missing {}", what))),
            }
        };

        let (line_no, line) = next_line("number of neurons")?;
        let num_neurons: usize = parse_token(line.trim(), "number of neurons", line_no)?;

        let (line_no, line) = next_line("initial states")?;
        let initial: Vec<u8> = parse_row(&line, num_neurons, "initial state", line_no)?;
        if let Some((i, s)) = initial.iter().find_position(|&&s| s > 1) {
            return Err(NetError::ParseError(format!(
                "line {}: initial state of neuron {} must be 0 or 1, got {}",
                line_no,
                i + 1,
                s
            )));
        }

        let (line_no, line) = next_line("thresholds")?;
        let thresholds: Vec<f64> = parse_row(&line, num_neurons, "threshold", line_no)?;

        let (line_no, line) = next_line("number of steps")?;
        let num_steps: usize = parse_token(line.trim(), "number of steps", line_no)?;

        let mut connections = Vec::new();
        loop {
            let (line_no, line) = next_line("connection terminator 'E'")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "E" {
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(NetError::ParseError(format!(
                    "line {}: expected 'a b w', got '{}'",
                    line_no, line
                )));
            }
            connections.push(Connection::new(
                parse_token(tokens[0], "source neuron", line_no)?,
                parse_token(tokens[1], "target neuron", line_no)?,
                parse_token(tokens[2], "weight", line_no)?,
            ));
        }

        Case::build(initial, thresholds, num_steps, connections)
    }

    /// Read a case in textual format from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, NetError> {
        let file = File::open(path)?;
        Case::from_reader(BufReader::new(file))
    }
}

fn parse_token<T: FromStr>(token: &str, what: &str, line_no: usize) -> Result<T, NetError> {
    token.parse().map_err(|_| {
        NetError::ParseError(format!("line {}: invalid {} '{}'", line_no, what, token))
    })
}

fn parse_row<T: FromStr>(
    line: &str,
    expected: usize,
    what: &str,
    line_no: usize,
) -> Result<Vec<T>, NetError> {
    let row = line
        .split_whitespace()
        .map(|token| parse_token(token, what, line_no))
        .collect::<Result<Vec<T>, NetError>>()?;
    if row.len() != expected {
        return Err(NetError::ParseError(format!(
            "line {}: expected {} values of {}, got {}",
            line_no,
            expected,
            what,
            row.len()
        )));
    }
    Ok(row)
}

impl FromStr for Case {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::from_reader(s.as_bytes())
    }
}

/// Writes the case back in textual format.
impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.num_neurons())?;
        writeln!(f, "{}", self.initial)?;
        writeln!(f, "{}", self.thresholds.iter().join(" "))?;
        writeln!(f, "{}", self.num_steps)?;
        for connection in self.connections.iter() {
            writeln!(
                f,
                "{} {} {}",
                connection.source_id(),
                connection.target_id(),
                connection.weight()
            )?;
        }
        writeln!(f, "E")
    }
}
