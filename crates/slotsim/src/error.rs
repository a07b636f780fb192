//! Error types for slotsim

use std::fmt;

/// Result type alias for slotsim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for simulator input handling
///
/// Simulator operations themselves cannot fail once inputs are valid
/// integers; all errors come from the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key field is not a valid integer
    InvalidKey(String),

    /// Value field is not a valid integer
    InvalidValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(text) => write!(f, "Invalid key: {:?} is not an integer", text),
            Error::InvalidValue(text) => write!(f, "Invalid value: {:?} is not an integer", text),
        }
    }
}

impl std::error::Error for Error {}
