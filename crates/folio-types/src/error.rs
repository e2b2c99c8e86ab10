use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing datasets
#[derive(Debug)]
pub enum Error {
    /// Dataset is not valid JSON or does not match the expected shape
    Json(serde_json::Error),

    /// Date string is not a zero-padded "YYYY-MM" value
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::InvalidDate(value) => {
                write!(f, "Invalid date '{}': expected YYYY-MM", value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::InvalidDate(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
