//! Error types for the PMF engine

use thiserror::Error;

use crate::types::Violations;

/// PMF engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// One or more parameter constraints were violated
    #[error("Validation error: {0}")]
    Validation(Violations),

    /// A field could not be parsed as a decimal number
    #[error("Invalid input")]
    InvalidInput,

    /// Arithmetic failed on inputs that got past validation
    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// Whether this error is reported to the user as the single generic
    /// "invalid input" message rather than a list of violations.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput | Error::Computation(_))
    }

    /// The violations carried by a validation error, if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Error::Validation(v) => Some(v),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
