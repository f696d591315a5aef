//! Error types for poset construction and pair lookup

use thiserror::Error;

/// Errors raised by items, tasks and datasets
///
/// Contract violations are caller mistakes; `NotImplemented` marks extension
/// points that exist in the API but have no behaviour yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PosetError {
    /// The caller broke a precondition (cross-chain comparison, bad task name, ...)
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// The requested path exists in the API but is not built yet
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Pair index outside `[0, len)`
    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Bit sequence could not be read as a binary number
    #[error("invalid bit string: {0}")]
    InvalidBits(String),

    /// Task configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PosetError {
    fn from(e: serde_json::Error) -> Self {
        PosetError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PosetError>;
