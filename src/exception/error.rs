//! Error types for building exceptions.

use thiserror::Error;

/// Errors that can occur while building exceptions from untyped input.
///
/// Constructing an [`HttpException`](crate::exception::HttpException) through the
/// typed API never fails; these only come out of the lookup and JSON entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The status code is not part of the fixed status table.
    #[error("Unknown status code: {0}")]
    UnknownStatus(String),

    /// An options bag could not be read, e.g. because it tried to set `status`.
    #[error("Invalid exception options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
