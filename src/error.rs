use thiserror::Error;

/// Main error type for the finder tools
#[derive(Error, Debug)]
pub enum FinderError {
    /// Cluster transport and request errors
    #[error("Cluster request failed: {0}")]
    Cluster(#[from] opensearch::Error),

    /// Transport configuration errors
    #[error("Transport build failed: {0}")]
    Transport(#[from] opensearch::http::transport::BuildError),

    /// Malformed endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal I/O errors
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No index matched the requested pattern
    #[error("No index matches pattern '{0}'")]
    IndexNotFound(String),

    /// Cluster answered with a non-success status
    #[error("Cluster returned HTTP {status}: {reason}")]
    BadStatus { status: u16, reason: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FinderError {
    fn from(s: String) -> Self {
        FinderError::Other(s)
    }
}

impl From<&str> for FinderError {
    fn from(s: &str) -> Self {
        FinderError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FinderError>;
