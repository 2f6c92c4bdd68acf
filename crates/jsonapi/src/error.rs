//! Error types for resource-document serialization.

use thiserror::Error;

/// The primary error type for document serialization.
///
/// These errors indicate malformed input handed to the serializer by the
/// embedding layer, which is expected to call it with data that is already
/// well formed. Serialization aborts on the first malformed node and no
/// partial document is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A record passed through the resource path was not a JSON object.
    #[error("resource record must be a JSON object")]
    NotARecord,

    /// A record had no `id`, or its `id` was null or empty.
    #[error("every resource record must carry a non-empty id")]
    MissingId,

    /// A record `id` was neither a string nor a number.
    #[error("resource id must be a string or a number")]
    UnsupportedId,

    /// The type map had no `root` descriptor for the record being serialized.
    #[error("type map has no root descriptor")]
    MissingRootDescriptor,
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
