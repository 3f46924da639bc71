//! JSON:API exception values.
//!
//! This module provides the single [`HttpException`] type, the error object it
//! serializes to, and the status table that generates one named constructor
//! per supported HTTP status.

mod context;
mod error;
mod error_object;
mod http_exception;
mod status;
mod tests;

// Re-export public items
pub use context::CapturedContext;
pub use error::Error;
pub use error_object::{ErrorObject, HttpOptions, Links, Meta, PartialErrorObject, Source};
pub use http_exception::{Cause, HttpException, DEFAULT_MESSAGE, DEFAULT_STATUS};
pub use status::{reason_phrase_for, StatusCode};
