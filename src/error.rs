//! Unified error type.

use std::fmt;

/// The error type returned by statpage's fallible operations.
///
/// The registry core never errors: a failed lookup is `None`, an oversized
/// page truncates, a failed body allocation degrades the entry to bodyless.
/// This type surfaces what is left — emission problems: the underlying
/// write failing, or a templated entry emitted without its redirect target.
#[derive(Debug)]
pub enum Error {
    /// Writing the response to the underlying stream failed.
    Io(std::io::Error),
    /// A [`BodyKind::Templated`](crate::BodyKind::Templated) entry was
    /// emitted without a redirect target to substitute.
    MissingRedirectTarget,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::MissingRedirectTarget => {
                write!(f, "templated entry emitted without a redirect target")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::MissingRedirectTarget => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
