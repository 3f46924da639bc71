//! The JSON:API error object and the inputs used to build one.
//!
//! See <https://jsonapi.org/format/#error-objects>.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::exception::error::Error;
use crate::exception::http_exception::DEFAULT_STATUS;

/// Open-ended diagnostic data attached to an error.
pub type Meta = serde_json::Map<String, Value>;

/// Links related to the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// A link that leads to further details about this particular occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// A link that identifies the type of error this is.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl Links {
    /// Links with only an `about` member.
    pub fn about(url: impl Into<String>) -> Self {
        Self {
            about: Some(url.into()),
            type_: None,
        }
    }
}

/// Which part of the request caused the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// A JSON Pointer (RFC 6901) into the request document, e.g. `/data/attributes/title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// The URI query parameter that caused the error, e.g. `page[number]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// The request header that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl Source {
    /// A source pointing into the request document.
    pub fn pointer(pointer: impl Into<String>) -> Self {
        Self {
            pointer: Some(pointer.into()),
            ..Self::default()
        }
    }

    /// A source naming a query parameter.
    pub fn parameter(parameter: impl Into<String>) -> Self {
        Self {
            parameter: Some(parameter.into()),
            ..Self::default()
        }
    }

    /// A source naming a request header.
    pub fn header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            ..Self::default()
        }
    }
}

/// A single JSON:API error object.
///
/// `status` is always present; every other member is omitted from the JSON
/// output when it was not supplied. A received object without `status` reads
/// as `"500"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Input for the base exception constructor. Every member is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialErrorObject {
    pub id: Option<String>,
    pub links: Option<Links>,
    pub status: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
    pub source: Option<Source>,
    pub meta: Option<Meta>,
}

impl PartialErrorObject {
    /// Create an empty set of members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the occurrence identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the related links.
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Set the status code string.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the application-specific error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the occurrence-specific explanation.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the request locator.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the meta object.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Add a single entry to `meta`, creating it if needed.
    pub fn with_meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Meta::new)
            .insert(key.into(), value.into());
        self
    }
}

impl From<ErrorObject> for PartialErrorObject {
    fn from(object: ErrorObject) -> Self {
        Self {
            id: object.id,
            links: object.links,
            status: Some(object.status),
            code: object.code,
            title: object.title,
            detail: object.detail,
            source: object.source,
            meta: object.meta,
        }
    }
}

/// Options accepted by the fixed-status constructors.
///
/// `status`, `detail` and `code` are deliberately absent: the status comes
/// from the constructor, and detail and code are positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpOptions {
    pub id: Option<String>,
    pub links: Option<Links>,
    pub title: Option<String>,
    pub source: Option<Source>,
    pub meta: Option<Meta>,
}

impl HttpOptions {
    /// Create an empty set of members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from untyped JSON.
    ///
    /// Members other than `id`, `links`, `title`, `source` and `meta` are
    /// rejected, so a JSON bag cannot override the fixed status.
    pub fn from_json(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// Set the occurrence identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the related links.
    pub fn with_links(mut self, links: Links) -> Self {
        self.links = Some(links);
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the request locator.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the meta object.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Add a single entry to `meta`, creating it if needed.
    pub fn with_meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Meta::new)
            .insert(key.into(), value.into());
        self
    }
}
