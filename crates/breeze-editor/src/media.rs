//! The asynchronous media-selection boundary.

use async_trait::async_trait;

/// A selected media resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub id: i64,
}

/// The kind of media a block asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
}

/// Host-provided media library.
///
/// `pick` resolves to `None` when the user dismisses the dialog without
/// choosing; the session treats that as a strict no-op on attribute state.
/// Returning a [`Media`] with an empty URL is the explicit "remove the
/// current selection" answer.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn pick(&self, kind: MediaKind) -> Option<Media>;
}
