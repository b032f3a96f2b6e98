use std::fmt;

/// Result type for pcfgen-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading rows
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// HTTP request failed before a response arrived
    Http(reqwest::Error),

    /// Remote service answered with a non-success status
    Status { status: u16, url: String },

    /// Source is misconfigured (missing credentials, unknown kind, ...)
    Source(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { status, url } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
            Error::Source(msg) => write!(f, "Source error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Status { .. } | Error::Source(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
