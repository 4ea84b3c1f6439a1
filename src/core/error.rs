//! Error types for server communication
//!
//! Every endpoint call crosses a worker thread boundary, so the error type
//! carries owned data only.

use thiserror::Error;

/// Errors that can occur while talking to the chess server
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The worker thread running the blocking call panicked
    #[error("Worker thread panicked")]
    WorkerPanicked,
}

/// Result type alias for server calls
pub type ApiResult<T> = Result<T, ApiError>;
