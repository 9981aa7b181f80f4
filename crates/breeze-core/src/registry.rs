//! Block type registry.

use crate::error::{Error, Result};
use crate::instance::ResolvedAttrs;
use crate::schema::{AttrSource, BlockSchema};
use breeze_markup::Node;
use std::collections::HashMap;

/// A registered block type: its schema plus its save renderer.
pub trait BlockType: Send + Sync {
    /// The attribute schema. The schema's `type_id` is the registration key.
    fn schema(&self) -> &BlockSchema;

    /// Render the static save markup for the resolved attributes.
    ///
    /// Nested children are spliced at the tree's single
    /// [`Node::ChildrenSlot`] during serialization. Markup-sourced
    /// attributes must be emitted at their selector targets: applying the
    /// schema's selector rule to the rendered markup has to yield back
    /// exactly the value that was rendered.
    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node>;
}

/// Registry mapping block type ids to their implementations.
///
/// Constructed once at editor-session startup and read-only afterwards:
/// registration of an already-known type id is an error, never a silent
/// replacement.
#[derive(Default)]
pub struct BlockRegistry {
    types: HashMap<String, Box<dyn BlockType>>,
}

impl BlockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block type.
    ///
    /// Selector rules are validated here so a typo in a schema fails at
    /// startup instead of surfacing as silent extraction misses later.
    ///
    /// # Errors
    /// Returns `Error::DuplicateType` if the type id is already taken; the
    /// existing registration is left in place. Returns
    /// `Error::SchemaMismatch` for an unparseable selector rule.
    pub fn register(&mut self, block: Box<dyn BlockType>) -> Result<()> {
        let schema = block.schema();
        let type_id = schema.type_id.clone();
        if self.types.contains_key(&type_id) {
            return Err(Error::DuplicateType { type_id });
        }

        for spec in &schema.attributes {
            let selector = match &spec.source {
                AttrSource::Meta => continue,
                AttrSource::Text { selector } => selector,
                AttrSource::Attribute { selector, .. } => selector,
            };
            breeze_markup::Selector::parse(selector).map_err(|e| {
                Error::schema_mismatch(
                    &type_id,
                    format!("attribute {:?} has an invalid selector: {e}", spec.name),
                )
            })?;
        }

        tracing::debug!(type_id = %type_id, "registered block type");
        self.types.insert(type_id, block);
        Ok(())
    }

    /// Look up a block type.
    ///
    /// # Errors
    /// Returns `Error::UnknownType` if no block is registered under the id.
    pub fn lookup(&self, type_id: &str) -> Result<&dyn BlockType> {
        self.types
            .get(type_id)
            .map(|b| b.as_ref())
            .ok_or_else(|| Error::UnknownType {
                type_id: type_id.to_string(),
            })
    }

    /// Look up just the schema of a registered block type.
    pub fn schema(&self, type_id: &str) -> Result<&BlockSchema> {
        self.lookup(type_id).map(|b| b.schema())
    }

    /// Whether a type id is registered.
    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    /// All registered type ids, sorted.
    pub fn type_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.types.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of registered block types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttrSpec;

    struct Fixture(BlockSchema);

    impl Fixture {
        fn boxed(type_id: &str) -> Box<dyn BlockType> {
            Box::new(Self(
                BlockSchema::new(type_id, "Fixture").attr(AttrSpec::string("align")),
            ))
        }
    }

    impl BlockType for Fixture {
        fn schema(&self) -> &BlockSchema {
            &self.0
        }

        fn save(&self, _attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
            Vec::new()
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = BlockRegistry::new();
        registry.register(Fixture::boxed("ns/a")).unwrap();

        assert!(registry.contains("ns/a"));
        assert_eq!(registry.schema("ns/a").unwrap().type_id, "ns/a");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_fails_and_preserves_size() {
        let mut registry = BlockRegistry::new();
        registry.register(Fixture::boxed("ns/a")).unwrap();

        let result = registry.register(Fixture::boxed("ns/a"));
        assert!(matches!(result, Err(Error::DuplicateType { type_id }) if type_id == "ns/a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_lookup_fails() {
        let registry = BlockRegistry::new();
        let result = registry.lookup("ns/missing");
        assert!(matches!(result, Err(Error::UnknownType { type_id }) if type_id == "ns/missing"));
    }

    #[test]
    fn type_ids_are_sorted() {
        let mut registry = BlockRegistry::new();
        registry.register(Fixture::boxed("ns/b")).unwrap();
        registry.register(Fixture::boxed("ns/a")).unwrap();
        assert_eq!(registry.type_ids(), vec!["ns/a", "ns/b"]);
    }
}
