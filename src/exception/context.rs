//! Synthetic cause recorded when an exception is built without one.

use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

/// Where an exception was constructed, standing in for a missing cause.
///
/// The backtrace is only resolved when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`
/// enables it; the location is always recorded.
#[derive(Debug)]
pub struct CapturedContext {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl CapturedContext {
    pub(crate) fn capture(location: &'static Location<'static>) -> Self {
        Self {
            location,
            backtrace: Backtrace::capture(),
        }
    }

    /// Source location of the constructor call.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Backtrace taken at construction; empty unless enabled by the environment.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for CapturedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Captured raw error context")
    }
}

impl StdError for CapturedContext {}
