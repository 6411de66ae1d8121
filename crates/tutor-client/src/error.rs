//! Client error types.

/// Errors that can occur when using the tutor API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Requested content does not exist on the server.
    #[error("content not found: {message}")]
    NotFound {
        /// The server's message.
        message: String,
    },

    /// The server rejected the quote inputs.
    #[error("invalid quote input: {message}")]
    InvalidInput {
        /// The server's message.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
