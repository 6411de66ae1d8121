//! Error types for content storage.

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The requested content does not exist.
    #[error("content not found: {entity}")]
    NotFound {
        /// The missing content kind (e.g. "services").
        entity: String,
    },

    /// Reading the backing file failed.
    #[error("content read failed for {entity}: {source}")]
    Io {
        /// The content kind being read.
        entity: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not valid JSON of the expected shape.
    #[error("content malformed for {entity}: {source}")]
    Malformed {
        /// The content kind being read.
        entity: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
