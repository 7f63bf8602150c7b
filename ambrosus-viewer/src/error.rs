//! Error types for the viewer layer.

use thiserror::Error;

/// Result type for viewer operations.
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Errors that can occur in viewer operations.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The data-access layer failed to answer a lookup.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// Configuration or records could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (reading configuration or records).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The UI side of the scan loop went away.
    #[error("channel closed")]
    ChannelClosed,
}
