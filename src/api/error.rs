/// Error types for Notion API calls
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-related errors (connect, timeout, malformed response body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Notion returned a non-success status
    #[error("Notion API error ({status}): {message}")]
    Upstream { status: u16, message: String },
}
