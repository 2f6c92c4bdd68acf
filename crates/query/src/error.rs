//! Error types for query validation.
//!
//! Every error here means the caller supplied input that violates a
//! precondition: a missing required argument, a malformed pagination
//! parameter, or a malformed identifier. They are always recoverable - the
//! caller fixes the input and retries - and the embedding layer renders
//! them as HTTP 400 responses.

use thiserror::Error;

/// The primary error type for query validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required argument was absent, or present but null.
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// The first missing key, in the caller's declared order.
        name: String,
    },

    /// A pagination parameter violated a constraint.
    #[error("{message}")]
    InvalidPagination {
        /// Which constraint was violated.
        message: String,
    },

    /// An identifier did not parse as a UUID.
    #[error("ID length should be between 32 and 36 chars")]
    InvalidIdentifier,
}

/// Result type alias for query validation.
pub type Result<T> = std::result::Result<T, QueryError>;
