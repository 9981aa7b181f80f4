//! Host-independent editing layer for Breezeblocks.
//!
//! The host editor owns rendering and input; this crate owns the state
//! transitions between them. An [`session::EditSession`] holds the block
//! tree and applies every mutation synchronously: attribute setters are
//! all-or-nothing, child insertion enforces the schema allow-lists, and
//! template expansion fires exactly once per container (only while its
//! child count is zero).
//!
//! Asynchronous resource selection (picking an image) suspends only at the
//! provider boundary defined in [`media`]; a cancelled pick is a strict
//! no-op on attribute state.
//!
//! Blocks contribute their editing UI as plain data: [`view::EditView`]
//! describes toolbars, inspector panels, and the editable body markup
//! without referencing any concrete UI toolkit.

pub mod error;
pub mod expand;
pub mod media;
pub mod session;
pub mod view;

pub use error::{Error, Result};
pub use expand::{expand_counted, ChildSpec, TemplateCache};
pub use media::{Media, MediaKind, MediaProvider};
pub use session::EditSession;
pub use view::{
    align_wrapper, BlockUi, EditView, InspectorControl, InspectorPanel, SelectOption,
    ToolbarControl, UiRegistry, WrapperProps,
};
