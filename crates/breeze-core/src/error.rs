//! Error types for breeze-core

/// Result type for breeze-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in breeze-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block type already registered: {type_id}")]
    DuplicateType { type_id: String },

    #[error("unknown block type: {type_id}")]
    UnknownType { type_id: String },

    #[error("schema mismatch for {type_id}: {message}")]
    SchemaMismatch { type_id: String, message: String },

    #[error("attribute {name:?} expects {expected}, got {actual}")]
    TypeCheck {
        name: String,
        expected: &'static str,
        actual: String,
    },

    #[error("markup error: {0}")]
    Markup(#[from] breeze_markup::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn schema_mismatch(type_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            type_id: type_id.into(),
            message: message.into(),
        }
    }
}
