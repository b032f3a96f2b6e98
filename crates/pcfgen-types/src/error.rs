use std::fmt;

/// Result type for pcfgen-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// The same column name was configured twice
    DuplicateColumn(String),

    /// Column specification is unusable (e.g. blank name)
    InvalidColumn(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateColumn(name) => write!(f, "Column '{}' is configured twice", name),
            Error::InvalidColumn(msg) => write!(f, "Invalid column: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
