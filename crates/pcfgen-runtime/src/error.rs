use std::fmt;
use std::path::PathBuf;

/// Result type for pcfgen-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
///
/// Every variant is fatal for a batch: they are raised while loading
/// configuration, the template or the rows, before any file is written,
/// or when the output sink cannot write.
#[derive(Debug)]
pub enum Error {
    /// Row source failed to load
    Provider(pcfgen_providers::Error),

    /// Column configuration rejected
    Column(pcfgen_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Template file could not be read
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output file could not be written
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "Source error: {}", err),
            Error::Column(err) => write!(f, "Column configuration error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Template { path, source } => {
                write!(f, "Cannot read template {}: {}", path.display(), source)
            }
            Error::Output { path, source } => {
                write!(f, "Cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Column(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Template { source, .. } | Error::Output { source, .. } => Some(source),
            Error::Config(_) => None,
        }
    }
}

impl From<pcfgen_providers::Error> for Error {
    fn from(err: pcfgen_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<pcfgen_types::Error> for Error {
    fn from(err: pcfgen_types::Error) -> Self {
        Error::Column(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
