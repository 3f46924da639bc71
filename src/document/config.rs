//! Response rendering configuration.

/// Media type registered for JSON:API documents.
pub const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Configuration for rendering error documents into HTTP responses.
#[derive(Debug, Clone)]
pub struct ResponseConfig {
    /// The `Content-Type` of the rendered body.
    pub content_type: String,
    /// The `Server` header value, or `None` to omit the header.
    pub server_name: Option<String>,
    /// Whether to pretty-print the JSON body.
    pub pretty: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            content_type: JSONAPI_MEDIA_TYPE.to_string(),
            server_name: Some("jsonapi-errors-rs".to_string()),
            pretty: false,
        }
    }
}
