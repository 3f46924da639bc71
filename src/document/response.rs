//! HTTP responses carrying error documents.

use std::collections::HashMap;

use crate::document::config::ResponseConfig;
use crate::document::error::Error;
use crate::document::error_document::ErrorDocument;
use crate::exception::{reason_phrase_for, HttpException, StatusCode};

/// Represents an HTTP error response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The numeric HTTP status code
    pub status: u16,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Render an error document using the document's overall status.
    ///
    /// A status that is missing or not a valid HTTP code is sent as 500.
    pub fn from_document(document: &ErrorDocument, config: &ResponseConfig) -> Result<Self, Error> {
        let status = document
            .status()
            .and_then(|status| status.parse::<u16>().ok())
            .filter(|code| (100..1000).contains(code))
            .unwrap_or(StatusCode::InternalServerError.as_u16());

        let body = if config.pretty {
            document.to_string_pretty()?.into_bytes()
        } else {
            document.to_vec()?
        };

        log::debug!(
            "Rendering {} error(s) as {} {}",
            document.len(),
            status,
            reason_phrase_for(status)
        );

        let mut response = Self::new(status)
            .with_content_type(config.content_type.clone())
            .with_body_bytes(body);
        if let Some(server_name) = &config.server_name {
            response = response.with_header("Server", server_name.clone());
        }

        Ok(response)
    }

    /// Render a single exception as an error document.
    pub fn from_exception(exception: &HttpException, config: &ResponseConfig) -> Result<Self, Error> {
        Self::from_document(&ErrorDocument::from(exception), config)
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        let content_length = self.body.len().to_string();
        self.with_header("Content-Length", content_length)
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// The reason phrase sent on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        reason_phrase_for(self.status)
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let status_line = format!("HTTP/1.1 {} {}\r\n", self.status, self.reason_phrase());
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers
        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        // Add the body
        bytes.extend_from_slice(&self.body);

        bytes
    }
}
