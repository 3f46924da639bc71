//! JSON:API error documents.
//!
//! This module wraps exceptions in the top-level `{"errors": [...]}` document,
//! parses documents received from other services, and renders documents as
//! HTTP responses.

mod config;
mod error;
mod error_document;
mod response;

// Re-export public items
pub use config::{ResponseConfig, JSONAPI_MEDIA_TYPE};
pub use error::Error;
pub use error_document::{parse_error_document, ErrorDocument};
pub use response::HttpResponse;
