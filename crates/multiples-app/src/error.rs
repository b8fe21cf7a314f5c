use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid bound: {0:?} is not a non-negative integer")]
    InvalidBound(String),

    #[error("Bound {bound} exceeds the maximum of {max}")]
    BoundTooLarge { bound: u64, max: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors caused by the caller's bound rather than the host
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidBound(_) | Error::BoundTooLarge { .. })
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

// Convert to HTTP status codes for API responses
#[cfg(feature = "server")]
impl From<&Error> for axum::http::StatusCode {
    fn from(err: &Error) -> Self {
        use axum::http::StatusCode;
        match err {
            Error::InvalidBound(_) | Error::BoundTooLarge { .. } => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
