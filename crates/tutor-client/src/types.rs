//! Wire types specific to the client.
//!
//! The content and quote payloads come from `tutor-core`; this module only
//! adds the error envelope the service wraps failures in.

use serde::Deserialize;

/// Error response envelope returned by the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ApiErrorBody,
}

/// Error payload inside the envelope.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
