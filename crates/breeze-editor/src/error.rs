//! Error types for breeze-editor

use uuid::Uuid;

/// Result type for breeze-editor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in breeze-editor operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block not found: {id}")]
    BlockNotFound { id: Uuid },

    #[error("block type {child} is not allowed inside {parent}")]
    ChildNotAllowed { parent: String, child: String },

    #[error(transparent)]
    Core(#[from] breeze_core::Error),
}
