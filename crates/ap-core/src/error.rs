//! Engine error type.
//!
//! The adjustment path itself never fails: every lookup terminates in a
//! concrete vector.  Errors exist only at the string/number parsing
//! boundary, where collaborators hand the engine untyped data.

use thiserror::Error;

/// The top-level error type for `ap-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApError {
    #[error("unknown {what} {value:?}")]
    Parse {
        what:  &'static str,
        value: String,
    },

    #[error("turns value {0} is not one of 0, 0.5, 1, 1.5, 2, 2.5, 3")]
    InvalidTurns(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApError {
    /// Shorthand for a parse failure on an enum token.
    pub(crate) fn parse(what: &'static str, value: &str) -> Self {
        ApError::Parse { what, value: value.to_owned() }
    }
}

/// Shorthand result type for all `ap-*` crates.
pub type ApResult<T> = Result<T, ApError>;
