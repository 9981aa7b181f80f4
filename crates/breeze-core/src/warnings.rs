//! Non-fatal warnings surfaced while deserializing persisted markup.

/// A recoverable problem found while deserializing.
///
/// Persisted markup tolerates hand edits: every variant here corresponds
/// to a fallback that was applied instead of failing the load. Warnings
/// are returned to the caller alongside the parsed result and logged on
/// the `tracing` warn channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// A region's type id has no registered schema; the region was skipped.
    #[error("skipped region with unknown block type {type_id}")]
    UnknownType { type_id: String },

    /// The opening marker's metadata was not a valid JSON object; all
    /// metadata-sourced attributes fell back to their defaults.
    #[error("ignored invalid metadata on {type_id}: {message}")]
    InvalidMeta { type_id: String, message: String },

    /// A metadata key that the schema does not declare; ignored.
    #[error("ignored unknown attribute {name:?} on {type_id}")]
    UnknownAttribute { type_id: String, name: String },

    /// A metadata value of the wrong primitive type; the attribute fell
    /// back to its default.
    #[error("attribute {name:?} on {type_id} expects {expected}, got {found}; using default")]
    TypeMismatch {
        type_id: String,
        name: String,
        expected: &'static str,
        found: String,
    },

    /// A markup-sourced attribute's selector matched nothing; the
    /// attribute fell back to its default.
    #[error("no element matching {selector:?} for attribute {name:?} on {type_id}; using default")]
    MissingMarkupSource {
        type_id: String,
        name: String,
        selector: String,
    },

    /// A child region whose type the parent's allow-list rejects; the
    /// child was kept (enforcement happens on edit, not on load).
    #[error("block {child} is not allowed inside {parent}")]
    DisallowedChild { parent: String, child: String },

    /// Malformed frame markers (stray close or unterminated open).
    #[error("malformed block framing near {type_id}: {message}")]
    MalformedFrame { type_id: String, message: String },
}
