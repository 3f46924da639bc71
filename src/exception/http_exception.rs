//! The exception value carried through a consuming application.

use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;

use log::Level;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::exception::context::CapturedContext;
use crate::exception::error_object::{ErrorObject, HttpOptions, Links, Meta, PartialErrorObject, Source};
use crate::exception::status::StatusCode;

/// Status used when none is supplied.
pub const DEFAULT_STATUS: &str = "500";

/// Display message used when no `detail` is supplied.
pub const DEFAULT_MESSAGE: &str = "An error occurred";

/// The lower-level failure behind an exception.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// One JSON:API error occurrence.
///
/// An `HttpException` is immutable once built. It serializes to exactly the
/// error object it was built from (see [`HttpException::to_json`]); the cause
/// and the construction location are kept for diagnostics only.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpException {
    record: ErrorObject,
    message: String,
    location: &'static Location<'static>,
    #[source]
    cause: Cause,
}

impl HttpException {
    /// Create an exception from a partial error object and an optional cause.
    ///
    /// # Arguments
    ///
    /// * `parts` - The error members; `status` defaults to `"500"`
    /// * `cause` - The lower-level failure; when `None`, a [`CapturedContext`]
    ///   pointing at the caller is recorded instead
    ///
    /// # Returns
    ///
    /// A new exception. Construction never fails and no member is validated.
    #[track_caller]
    pub fn from_parts(parts: PartialErrorObject, cause: Option<Cause>) -> Self {
        let location = Location::caller();
        let message = parts
            .detail
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let cause = cause.unwrap_or_else(|| Arc::new(CapturedContext::capture(location)));

        let record = ErrorObject {
            id: parts.id,
            links: parts.links,
            status: parts.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            code: parts.code,
            title: parts.title,
            detail: parts.detail,
            source: parts.source,
            meta: parts.meta,
        };

        log::trace!("Constructed {} exception at {}", record.status, location);

        Self {
            record,
            message,
            location,
            cause,
        }
    }

    /// Create an exception, capturing the call site as its cause.
    #[track_caller]
    pub fn new(parts: PartialErrorObject) -> Self {
        Self::from_parts(parts, None)
    }

    /// Create an exception wrapping a lower-level error.
    #[track_caller]
    pub fn with_cause<E>(parts: PartialErrorObject, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_parts(parts, Some(Arc::new(cause)))
    }

    /// Create an exception for one of the fixed statuses.
    ///
    /// The resulting record is `{status, detail, code, ...options}`, with
    /// `options.title` falling back to the status' default title.
    #[track_caller]
    pub fn of(
        status: StatusCode,
        detail: impl Into<String>,
        code: Option<&str>,
        options: Option<HttpOptions>,
    ) -> Self {
        let options = options.unwrap_or_default();

        Self::new(PartialErrorObject {
            id: options.id,
            links: options.links,
            status: Some(status.as_str().to_string()),
            code: code.map(str::to_string),
            title: Some(
                options
                    .title
                    .unwrap_or_else(|| status.default_title().to_string()),
            ),
            detail: Some(detail.into()),
            source: options.source,
            meta: options.meta,
        })
    }

    /// Replace the cause, e.g. on an exception built by a named constructor.
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Arc::new(cause);
        self
    }

    /// The public error object, exactly as stored. The cause is not included.
    pub fn to_json(&self) -> ErrorObject {
        self.record.clone()
    }

    /// The supplied cause, or the [`CapturedContext`] recorded at construction.
    pub fn original_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Whether the exception carries a status.
    pub fn is_valid(&self) -> bool {
        !self.record.status.is_empty()
    }

    /// The identifier of this occurrence.
    pub fn id(&self) -> Option<&str> {
        self.record.id.as_deref()
    }

    /// Links related to the error.
    pub fn links(&self) -> Option<&Links> {
        self.record.links.as_ref()
    }

    /// The HTTP status code as a string, e.g. `"404"`.
    pub fn status(&self) -> &str {
        &self.record.status
    }

    /// The application-specific error code.
    pub fn code(&self) -> Option<&str> {
        self.record.code.as_deref()
    }

    /// The short summary of the error kind.
    pub fn title(&self) -> Option<&str> {
        self.record.title.as_deref()
    }

    /// The explanation specific to this occurrence.
    pub fn detail(&self) -> Option<&str> {
        self.record.detail.as_deref()
    }

    /// The JSON:API `source` member. For the error chain use
    /// [`std::error::Error::source`] or [`HttpException::original_error`].
    pub fn source(&self) -> Option<&Source> {
        self.record.source.as_ref()
    }

    /// Extra diagnostic data.
    pub fn meta(&self) -> Option<&Meta> {
        self.record.meta.as_ref()
    }

    /// The display message: `detail`, or `"An error occurred"`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source location of the constructor call.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The table entry matching this exception's status, if any.
    pub fn kind(&self) -> Option<StatusCode> {
        self.record.status.parse().ok()
    }

    /// Whether the status is exactly `status`.
    pub fn is(&self, status: StatusCode) -> bool {
        self.record.status == status.as_str()
    }

    /// Whether the status is a 4xx code, inside or outside the table.
    pub fn is_client_error(&self) -> bool {
        matches!(self.numeric_status(), Some(code) if (400..500).contains(&code))
    }

    /// Whether the status is a 5xx code, inside or outside the table.
    pub fn is_server_error(&self) -> bool {
        matches!(self.numeric_status(), Some(code) if (500..600).contains(&code))
    }

    /// Log the exception with its cause: 5xx at error level, anything else at warn.
    pub fn report(&self) {
        let level = if self.is_server_error() {
            Level::Error
        } else {
            Level::Warn
        };

        log::log!(
            level,
            "{} {}: {} (at {}); caused by: {}",
            self.record.status,
            self.record.title.as_deref().unwrap_or("-"),
            self.message,
            self.location,
            self.cause
        );
    }

    fn numeric_status(&self) -> Option<u16> {
        self.record.status.parse().ok()
    }
}

impl Default for HttpException {
    #[track_caller]
    fn default() -> Self {
        Self::new(PartialErrorObject::default())
    }
}

impl From<ErrorObject> for HttpException {
    #[track_caller]
    fn from(object: ErrorObject) -> Self {
        Self::new(object.into())
    }
}

impl Serialize for HttpException {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}
