//! Error types for breeze-markup

/// Result type for breeze-markup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in breeze-markup operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("invalid block metadata for {type_id}: {source}")]
    InvalidMeta {
        type_id: String,
        source: serde_json::Error,
    },
}
