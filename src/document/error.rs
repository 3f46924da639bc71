//! Error types for error documents and responses.

use thiserror::Error;

/// Errors that can occur while reading or rendering an error document.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained no bytes.
    #[error("Empty error document")]
    EmptyDocument,

    /// The document is not valid JSON or does not have the JSON:API error shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
