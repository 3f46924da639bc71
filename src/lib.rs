//! JSON:API error objects as typed Rust errors.
//!
//! This library provides a single exception type that carries one JSON:API
//! error object, a table of fixed-status constructors, and the document and
//! response types needed to send those errors over HTTP.
//!
//! # Features
//!
//! - One [`HttpException`] type for every status, with named constructors such as
//!   [`HttpException::not_found`] and [`HttpException::too_many_requests`]
//! - Serialization to the JSON:API error object shape, omitting absent members
//! - Automatic capture of the construction site when no cause is supplied
//! - Error documents (`{"errors": [...]}`) and HTTP response rendering
//! - Logging of exceptions with their cause through the `log` facade
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use jsonapi_errors::{HttpException, HttpOptions};
//!
//! let exception = HttpException::not_found(
//!     "Resource not found",
//!     Some("RESOURCE_NOT_FOUND"),
//!     Some(HttpOptions::new().with_meta_entry("debug", "x")),
//! );
//!
//! assert_eq!(exception.status(), "404");
//! assert_eq!(exception.title(), Some("Not Found"));
//! assert_eq!(
//!     serde_json::to_string(&exception.to_json()).unwrap(),
//!     r#"{"status":"404","code":"RESOURCE_NOT_FOUND","title":"Not Found","detail":"Resource not found","meta":{"debug":"x"}}"#
//! );
//! ```
//!
//! ## Error handling
//!
//! ```
//! use jsonapi_errors::{HttpException, PartialErrorObject, StatusCode};
//!
//! fn load(path: &str) -> Result<String, HttpException> {
//!     std::fs::read_to_string(path).map_err(|err| {
//!         HttpException::with_cause(
//!             PartialErrorObject::new().with_detail(format!("Could not read {path}")),
//!             err,
//!         )
//!     })
//! }
//!
//! match load("/definitely/not/here") {
//!     Ok(_) => println!("Loaded"),
//!     Err(err) if err.is(StatusCode::InternalServerError) => {
//!         println!("{} caused by {}", err, err.original_error());
//!     }
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! ## Responses
//!
//! ```
//! use jsonapi_errors::{HttpException, HttpResponse, ResponseConfig};
//!
//! let exception = HttpException::conflict("Version mismatch", None, None);
//! let response = HttpResponse::from_exception(&exception, &ResponseConfig::default()).unwrap();
//!
//! assert_eq!(response.status, 409);
//! assert!(String::from_utf8_lossy(&response.to_bytes()).starts_with("HTTP/1.1 409 Conflict\r\n"));
//! ```

// Export the exception module
pub mod exception;

// Export the document module
pub mod document;

// Re-export commonly used items for convenience
pub use document::{
    parse_error_document, Error as DocumentError, ErrorDocument, HttpResponse, ResponseConfig,
};
pub use exception::{
    CapturedContext, Error as ExceptionError, ErrorObject, HttpException, HttpOptions, Links, Meta,
    PartialErrorObject, Source, StatusCode,
};
