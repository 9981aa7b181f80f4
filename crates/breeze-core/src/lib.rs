//! Block schemas, registry, and the serialization contract for Breezeblocks.
//!
//! A block type declares an attribute schema (names, primitive types,
//! defaults, and where each value lives in the persisted form) plus a save
//! renderer that turns resolved attributes into static markup. This crate
//! owns the contract that makes persistence work:
//!
//! - [`registry::BlockRegistry`] - the process-wide type-id -> block type
//!   mapping, populated once at startup and read-only afterwards.
//! - [`serialize::serialize`] / [`deserialize::deserialize`] - the
//!   round-trip pair. For every instance whose attributes type-check,
//!   `deserialize(serialize(b)) == b`.
//! - [`classes::derive_class_names`] - deterministic class-list derivation
//!   shared by save renderers and edit views.
//!
//! Deserialization is deliberately lenient: persisted markup may have been
//! hand-edited, so a missing selector target or a mistyped metadata value
//! falls back to the schema default and is reported on the
//! [`warnings::ParseWarning`] channel instead of failing the load.

pub mod classes;
pub mod deserialize;
pub mod error;
pub mod instance;
pub mod registry;
pub mod schema;
pub mod serialize;
pub mod warnings;

pub use classes::derive_class_names;
pub use deserialize::{deserialize, parse_document, Deserialized, ParsedDocument};
pub use error::{Error, Result};
pub use instance::{BlockInstance, ResolvedAttrs};
pub use registry::{BlockRegistry, BlockType};
pub use schema::{AttrSource, AttrSpec, AttrType, BlockSchema, Template};
pub use serialize::{serialize, serialize_document};
pub use warnings::ParseWarning;
