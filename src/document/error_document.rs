//! The top-level JSON:API error document.

use serde::{Deserialize, Serialize};

use crate::document::error::Error;
use crate::exception::{ErrorObject, HttpException, Meta, StatusCode};

/// A JSON:API document carrying one or more errors: `{"errors": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// The error objects, in the order they were raised.
    pub errors: Vec<ErrorObject>,
    /// Non-standard meta information about the document as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ErrorDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error object.
    pub fn push(&mut self, error: impl Into<ErrorObject>) {
        self.errors.push(error.into());
    }

    /// Set the document-level `meta` member.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The most generally applicable status for the whole document.
    ///
    /// A single status is used as is. Differing 4xx statuses collapse to
    /// `"400"`; any other mix collapses to `"500"`. Returns `None` for an
    /// empty document.
    pub fn status(&self) -> Option<String> {
        let first = self.errors.first()?;
        if self.errors.iter().all(|error| error.status == first.status) {
            return Some(first.status.clone());
        }

        let all_client = self.errors.iter().all(|error| {
            matches!(error.status.parse::<u16>(), Ok(code) if (400..500).contains(&code))
        });
        let status = if all_client {
            StatusCode::BadRequest
        } else {
            StatusCode::InternalServerError
        };

        Some(status.as_str().to_string())
    }

    /// Serialize the document to compact JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize the document to indented JSON.
    pub fn to_string_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild one exception per error object, keeping every member verbatim.
    #[track_caller]
    pub fn into_exceptions(self) -> Vec<HttpException> {
        let mut exceptions = Vec::with_capacity(self.errors.len());
        for error in self.errors {
            exceptions.push(HttpException::from(error));
        }
        exceptions
    }
}

impl From<&HttpException> for ErrorObject {
    fn from(exception: &HttpException) -> Self {
        exception.to_json()
    }
}

impl From<HttpException> for ErrorObject {
    fn from(exception: HttpException) -> Self {
        exception.to_json()
    }
}

impl From<&HttpException> for ErrorDocument {
    fn from(exception: &HttpException) -> Self {
        Self {
            errors: vec![exception.to_json()],
            meta: None,
        }
    }
}

impl From<HttpException> for ErrorDocument {
    fn from(exception: HttpException) -> Self {
        Self::from(&exception)
    }
}

impl<E: Into<ErrorObject>> FromIterator<E> for ErrorDocument {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Into::into).collect(),
            meta: None,
        }
    }
}

/// Parse a JSON:API error document from a byte slice.
///
/// # Arguments
///
/// * `input` - The raw document, e.g. the body of an upstream error response
///
/// # Returns
///
/// The parsed document, or an error if the input is empty or not an error document
pub fn parse_error_document(input: &[u8]) -> Result<ErrorDocument, Error> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyDocument);
    }

    let document = serde_json::from_slice(input)?;
    Ok(document)
}
