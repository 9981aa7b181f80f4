//! Markup fragment handling for Breezeblocks.
//!
//! This crate provides the pieces of the persisted-markup boundary that do
//! not know anything about block schemas:
//!
//! - [`node`] - the markup node tree that block save renderers produce, and
//!   its deterministic string rendering.
//! - [`reader`] - a lenient element reader that turns persisted static
//!   markup back into a node tree for selector extraction.
//! - [`frame`] - the comment-marker framing that delimits one serialized
//!   block region, carrying the block's type id and its explicit-attribute
//!   JSON object:
//!
//! ```text
//! <!-- blk:breezeblocks/tile {"ratio":"16by9"} -->
//! <div class="wp-block-breezeblocks-tile">...</div>
//! <!-- /blk:breezeblocks/tile -->
//! ```
//!
//! - [`selector`] - structural selector paths (`a`, `.accordion__title`,
//!   `dt .accordion__title`) used to pull attribute values back out of
//!   static markup.
//!
//! Schema knowledge (which attributes exist, where they are sourced from,
//! defaults, type checking) lives in `breeze-core`; this crate only moves
//! strings and trees around.

pub mod error;
pub mod frame;
pub mod node;
pub mod reader;
pub mod selector;

pub use error::{Error, Result};
pub use frame::{scan_regions, FrameIssue, Region};
pub use node::{Element, Node};
pub use reader::read_fragment;
pub use selector::Selector;
