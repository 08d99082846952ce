//! Error types for the access-control crate
//!
//! Authorization decisions themselves are infallible; errors only arise at
//! the edges where externally supplied strings and documents are parsed.

use thiserror::Error;

/// Errors from strict parsing and configuration-document loading.
#[derive(Debug, Error)]
pub enum AccessControlError {
    /// A role string outside the nine-role vocabulary.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A permission token outside the closed vocabulary.
    #[error("unknown permission token: {0}")]
    UnknownPermission(String),

    /// An externally supplied JSON document (menu tree, custom-role list)
    /// that does not have the expected shape.
    #[error("malformed configuration document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
