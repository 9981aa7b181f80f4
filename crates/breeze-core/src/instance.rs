//! Block instances: attribute state and the instance tree.

use crate::error::{Error, Result};
use crate::schema::{AttrType, BlockSchema};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

/// A block instance: one node in the editor tree.
///
/// Attribute storage holds overrides only; absent entries resolve to the
/// schema default through [`ResolvedAttrs`]. Setting an attribute to a
/// value equal to its default removes the override, which is what keeps
/// the serialization round-trip exact (serialized metadata omits
/// default-equal values).
///
/// The client id addresses the instance within an editing session. It is
/// never serialized and does not participate in equality.
#[derive(Debug, Clone)]
pub struct BlockInstance {
    id: Uuid,
    type_id: String,
    overrides: BTreeMap<String, Value>,
    children: Vec<BlockInstance>,
}

impl PartialEq for BlockInstance {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            && self.overrides == other.overrides
            && self.children == other.children
    }
}

impl BlockInstance {
    /// Create an instance of the given schema with every attribute at its
    /// default and no children.
    pub fn new(schema: &BlockSchema) -> Self {
        Self {
            id: Uuid::new_v4(),
            type_id: schema.type_id.clone(),
            overrides: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an instance with initial attribute overrides, type-checked.
    pub fn with_attrs<'a>(
        schema: &BlockSchema,
        attrs: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<Self> {
        let mut instance = Self::new(schema);
        let updates: Vec<(&str, Value)> = attrs.into_iter().collect();
        instance.set_attributes(schema, updates)?;
        Ok(instance)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn children(&self) -> &[BlockInstance] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<BlockInstance> {
        &mut self.children
    }

    /// Attribute overrides currently set, in name order.
    pub fn overrides(&self) -> &BTreeMap<String, Value> {
        &self.overrides
    }

    /// Append a child instance. Allow-list enforcement is the editing
    /// layer's responsibility.
    pub fn push_child(&mut self, child: BlockInstance) {
        self.children.push(child);
    }

    /// Resolve attributes against the schema.
    pub fn resolved<'a>(&'a self, schema: &'a BlockSchema) -> ResolvedAttrs<'a> {
        ResolvedAttrs {
            schema,
            overrides: &self.overrides,
        }
    }

    /// Apply a set of attribute updates atomically.
    ///
    /// Every update is validated against the schema before any value is
    /// applied: on error the instance is left exactly as it was. A `Null`
    /// value clears the override (the attribute reverts to its default),
    /// matching the editor's "set to undefined" idiom.
    pub fn set_attributes<'a>(
        &mut self,
        schema: &BlockSchema,
        updates: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<()> {
        let updates: Vec<(&str, Value)> = updates.into_iter().collect();

        for (name, value) in &updates {
            let spec = schema.attribute(name).ok_or_else(|| {
                Error::schema_mismatch(
                    &schema.type_id,
                    format!("no attribute named {name:?}"),
                )
            })?;
            if !value.is_null() && !spec.kind.check(value) {
                return Err(Error::TypeCheck {
                    name: (*name).to_string(),
                    expected: spec.kind.name(),
                    actual: AttrType::describe(value).to_string(),
                });
            }
        }

        for (name, value) in updates {
            if value.is_null() || Some(&value) == schema.default_of(name) {
                self.overrides.remove(name);
            } else {
                self.overrides.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Find a descendant (or this instance) by client id.
    pub fn find(&self, id: Uuid) -> Option<&BlockInstance> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut BlockInstance> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Remove a descendant by client id, returning it when found.
    pub fn remove_descendant(&mut self, id: Uuid) -> Option<BlockInstance> {
        if let Some(index) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(index));
        }
        self.children
            .iter_mut()
            .find_map(|c| c.remove_descendant(id))
    }
}

/// Read view over an instance's attributes with schema defaults applied.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAttrs<'a> {
    schema: &'a BlockSchema,
    overrides: &'a BTreeMap<String, Value>,
}

impl<'a> ResolvedAttrs<'a> {
    pub fn schema(&self) -> &'a BlockSchema {
        self.schema
    }

    /// The resolved value: the override if set, otherwise the default.
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.overrides.get(name).or_else(|| self.schema.default_of(name))
    }

    /// Whether an override is set (as opposed to resolving to a default).
    pub fn is_set(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// The resolved value as a string.
    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The resolved value as a boolean; absent resolves to `false`.
    pub fn bool(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// The resolved value as an integer.
    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Editor truthiness: set and non-empty / non-zero / true.
    ///
    /// Conditional classes in save renderers key off this rather than
    /// bare presence, so an empty alignment never emits an `align` class.
    pub fn truthy(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}
