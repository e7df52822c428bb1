//! Error module for the threshold network library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum NetError {
    /// Error for a malformed textual case, e.g., wrong token count or missing terminator.
    ParseError(String),
    /// Error for invalid parameters, e.g., an activation other than 0 or 1.
    InvalidParameters(String),
    /// Error for out of bounds access, e.g., a connection to a neuron that does not exist.
    OutOfBounds(String),
    /// Error for I/O operations.
    IOError(String),
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetError::ParseError(e) => write!(f, "Parse error: {}", e),
            NetError::InvalidParameters(e) => write!(f, "Invalid parameters: {}", e),
            NetError::OutOfBounds(e) => {
                write!(f, "Index out of bounds: {}", e)
            }
            NetError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for NetError {}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        NetError::IOError(e.to_string())
    }
}
