//! The fixed status table behind every named exception constructor.

use std::fmt;
use std::str::FromStr;

use crate::exception::error::Error;
use crate::exception::http_exception::HttpException;
use crate::exception::error_object::HttpOptions;

/// Expands the status table into the `StatusCode` enum, its lookups, and one
/// named constructor on `HttpException` per row.
macro_rules! status_table {
    ($(
        $(#[$attr:meta])*
        $variant:ident => ($code:literal, $title:literal, $reason:literal, $ctor:ident);
    )+) => {
        /// HTTP status codes that have a dedicated exception constructor.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatusCode {
            $(
                $(#[$attr])*
                $variant = $code,
            )+
        }

        impl StatusCode {
            /// Every entry of the table, in ascending status order.
            pub const ALL: &[StatusCode] = &[$(StatusCode::$variant),+];

            /// The status code as it appears in the `status` member, e.g. `"404"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => stringify!($code),)+
                }
            }

            /// The title used when the caller does not supply one.
            pub fn default_title(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $title,)+
                }
            }

            /// The standard HTTP reason phrase for this status code.
            pub fn reason_phrase(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $reason,)+
                }
            }
        }

        impl TryFrom<u16> for StatusCode {
            type Error = Error;

            fn try_from(code: u16) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(StatusCode::$variant),)+
                    _ => Err(Error::UnknownStatus(code.to_string())),
                }
            }
        }

        impl HttpException {
            $(
                #[doc = concat!("Creates a `", stringify!($code), " ", $title, "` exception.")]
                #[track_caller]
                pub fn $ctor(
                    detail: impl Into<String>,
                    code: Option<&str>,
                    options: Option<HttpOptions>,
                ) -> Self {
                    Self::of(StatusCode::$variant, detail, code, options)
                }
            )+
        }
    };
}

status_table! {
    BadRequest => (400, "Bad Request", "Bad Request", bad_request);
    Unauthorized => (401, "Unauthorized", "Unauthorized", unauthorized);
    Forbidden => (403, "Forbidden", "Forbidden", forbidden);
    NotFound => (404, "Not Found", "Not Found", not_found);
    MethodNotAllowed => (405, "Method Not Allowed", "Method Not Allowed", method_not_allowed);
    NotAcceptable => (406, "Not Acceptable", "Not Acceptable", not_acceptable);
    RequestTimeout => (408, "Request Timeout", "Request Timeout", request_timeout);
    Conflict => (409, "Conflict", "Conflict", conflict);
    UnsupportedMediaType => (415, "Unsupported Media Type", "Unsupported Media Type", unsupported_media_type);
    ImATeapot => (418, "I'm a teapot", "I'm a teapot", im_a_teapot);
    UnprocessableEntity => (422, "Unprocessable Entity", "Unprocessable Entity", unprocessable_entity);
    /// The default title keeps the historical singular "Request".
    TooManyRequests => (429, "Too Many Request", "Too Many Requests", too_many_requests);
    InternalServerError => (500, "Internal Server Error", "Internal Server Error", internal_server_error);
    NotImplemented => (501, "Not Implemented", "Not Implemented", not_implemented);
    ServiceUnavailable => (503, "Service Unavailable", "Service Unavailable", service_unavailable);
    GatewayTimeout => (504, "Gateway Timeout", "Gateway Timeout", gateway_timeout);
    HttpVersionNotSupported => (505, "HTTP Version Not Supported", "HTTP Version Not Supported", http_version_not_supported);
}

impl StatusCode {
    /// The numeric status code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether this is a 4xx status.
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Whether this is a 5xx status.
    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl FromStr for StatusCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCode::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_str(), self.reason_phrase())
    }
}

/// Reason phrase for an arbitrary numeric status, falling back to the status class.
pub fn reason_phrase_for(code: u16) -> &'static str {
    match StatusCode::try_from(code) {
        Ok(status) => status.reason_phrase(),
        Err(_) if (400..500).contains(&code) => "Client Error",
        Err(_) if (500..600).contains(&code) => "Server Error",
        Err(_) => "Unknown",
    }
}
