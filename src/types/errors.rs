//! Application error types.
//!
//! The filter translator and session decoder are total and never return
//! these. Errors only surface from the outer layers: configuration loading,
//! the events API client, and CLI input parsing.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for volunteer-core.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid caller input (malformed filters JSON, bad arguments).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The events API answered with a non-success status.
    #[error("api returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status carried by this error, if it came from an API response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request was rejected for lack of a valid session.
    pub fn is_unauthorized(&self) -> bool {
        self.http_status() == Some(401)
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = Error::status(404, "Event not found.");
        assert_eq!(err.to_string(), "api returned 404: Event not found.");
        assert_eq!(err.http_status(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        assert!(Error::status(401, "Not authenticated").is_unauthorized());
        assert_eq!(Error::validation("bad").http_status(), None);
    }
}
