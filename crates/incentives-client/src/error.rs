//! Client error types.

use thiserror::Error;

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from the query client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client could not be constructed.
    #[error("cannot set up query client: {0}")]
    Setup(String),

    /// Transport-level failure (connection refused, timeout, HTTP error).
    #[error("query failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with an error object.
    #[error("remote error: {message} (code {code})")]
    Rpc {
        /// Remote error code.
        code: i64,
        /// Remote error message, surfaced verbatim.
        message: String,
    },

    /// The response body was not a valid response envelope.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response envelope carried neither a result nor an error.
    #[error("malformed response: missing result")]
    MissingResult,
}
