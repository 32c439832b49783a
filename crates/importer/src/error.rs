//! Import error taxonomy

use thiserror::Error;

/// Errors that abort a collection import.
///
/// Unsupported method tokens are deliberately absent here: a leaf with an
/// unrecognized method is skipped with a warning, not failed.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document is not parseable JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The document parsed as JSON but is not a source collection.
    #[error("invalid collection format: {0}")]
    InvalidFormat(String),

    /// The document exceeds the configured size limit.
    #[error("file too large: {size} bytes exceeds maximum of {max} bytes")]
    FileTooLarge {
        /// Actual document size in bytes
        size: usize,
        /// Maximum allowed size in bytes
        max: usize,
    },

    /// The collection tree holds more items than the configured limit.
    #[error("too many items: {count} exceeds maximum of {max}")]
    TooManyItems {
        /// Actual item count (folders and leaves)
        count: usize,
        /// Maximum allowed items
        max: usize,
    },

    /// A `raw` body was not valid JSON text. Fails the whole import; no
    /// partial collection is emitted.
    #[error("malformed raw body on `{path}`: {reason}")]
    MalformedBody {
        /// Flattened name of the offending item
        path: String,
        /// Underlying JSON parse failure
        reason: String,
    },

    /// Required substructure is missing (e.g. a leaf without a request
    /// object). Fatal to the whole conversion.
    #[error("invalid structure at `{path}`: {reason}")]
    StructuralValidation {
        /// Flattened name of the offending item
        path: String,
        /// What was missing or malformed
        reason: String,
    },
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
