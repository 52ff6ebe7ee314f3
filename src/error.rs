use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io;
use std::result;

use http::StatusCode;
use url::Url;

/// Common errors that can occur while fetching and emitting match data.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Wrong number of command line arguments. Carries the program name.
    Usage(String),
    /// The club identifier was empty.
    InvalidClubId,
    /// The configured base URL could not be parsed.
    InvalidBaseUrl(url::ParseError),
    /// Connection, timeout or body read failure reported by the HTTP client.
    Http(attohttpc::Error),
    /// The upstream API answered with a 4xx or 5xx status.
    Status(StatusCode, Url),
    /// The response body was not valid JSON.
    Json(serde_json::Error),
    /// Writing the output failed.
    Io(io::Error),
}

/// A type that contains all the errors that can possibly occur while fetching matches.
#[derive(Debug)]
pub struct Error(pub(crate) Box<ErrorKind>);

impl Error {
    /// Get a reference to the `ErrorKind` inside.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume this `Error` and get the `ErrorKind` inside.
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Whether the error was raised while talking to the upstream API.
    pub fn is_request_failure(&self) -> bool {
        matches!(*self.0, ErrorKind::Http(_) | ErrorKind::Status(..) | ErrorKind::Json(_))
    }

    /// Whether the request was aborted because the timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match &*self.0 {
            ErrorKind::Http(err) => match err.kind() {
                attohttpc::ErrorKind::Io(err) => {
                    matches!(err.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
                }
                _ => false,
            },
            _ => false,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        use ErrorKind::*;

        match self {
            Usage(program) => write!(w, "Usage: {} <club_id>", program),
            InvalidClubId => write!(w, "Invalid club_id"),
            InvalidBaseUrl(e) => write!(w, "An error occurred: invalid base url: {}", e),
            Http(e) => write!(w, "API request failed: {}", e),
            Status(status, url) => write!(
                w,
                "API request failed: {} {} for url: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
                url
            ),
            Json(e) => write!(w, "API request failed: invalid JSON body: {}", e),
            Io(e) => write!(w, "An error occurred: {}", e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, w)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.0 {
            ErrorKind::InvalidBaseUrl(e) => Some(e),
            ErrorKind::Http(e) => Some(e),
            ErrorKind::Json(e) => Some(e),
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(err: ErrorKind) -> Error {
        Error(Box::new(err))
    }
}

impl From<attohttpc::Error> for Error {
    fn from(err: attohttpc::Error) -> Error {
        Error(Box::new(ErrorKind::Http(err)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error(Box::new(ErrorKind::Json(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error(Box::new(ErrorKind::InvalidBaseUrl(err)))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error(Box::new(ErrorKind::Io(err)))
    }
}

/// Wrapper for the `Result` type with an `Error`.
pub type Result<T = ()> = result::Result<T, Error>;
