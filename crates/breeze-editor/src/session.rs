//! The edit session: tree ownership and state transitions.

use crate::error::{Error, Result};
use crate::expand::{ChildSpec, TemplateCache};
use crate::media::{MediaKind, MediaProvider};
use crate::view::{EditView, UiRegistry};
use breeze_core::{
    parse_document, serialize_document, BlockInstance, BlockRegistry, ParseWarning, Template,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// One editing session over a tree of block instances.
///
/// All mutation is synchronous and single-threaded: each operation runs to
/// completion before the next one starts, so partial states are never
/// observable. The session borrows the registry built at startup; it never
/// registers or replaces block types itself.
pub struct EditSession<'r> {
    registry: &'r BlockRegistry,
    roots: Vec<BlockInstance>,
    templates: TemplateCache,
}

impl<'r> EditSession<'r> {
    /// Start an empty session.
    pub fn new(registry: &'r BlockRegistry) -> Self {
        Self {
            registry,
            roots: Vec::new(),
            templates: TemplateCache::new(),
        }
    }

    /// Start a session from persisted markup.
    ///
    /// Loading is lenient; the returned warnings describe any fallbacks
    /// that were applied to the persisted content.
    pub fn load(registry: &'r BlockRegistry, source: &str) -> (Self, Vec<ParseWarning>) {
        let document = parse_document(source, registry);
        let session = Self {
            registry,
            roots: document.blocks,
            templates: TemplateCache::new(),
        };
        (session, document.warnings)
    }

    /// The top-level blocks, in document order.
    pub fn roots(&self) -> &[BlockInstance] {
        &self.roots
    }

    /// Find any block in the tree by client id.
    pub fn find(&self, id: Uuid) -> Option<&BlockInstance> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    fn find_mut(&mut self, id: Uuid) -> Option<&mut BlockInstance> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }

    fn get(&self, id: Uuid) -> Result<&BlockInstance> {
        self.find(id).ok_or(Error::BlockNotFound { id })
    }

    /// Insert a new top-level block with default attributes.
    pub fn insert_root(&mut self, type_id: &str) -> Result<Uuid> {
        let schema = self.registry.schema(type_id)?;
        let block = BlockInstance::new(schema);
        let id = block.id();
        self.roots.push(block);
        tracing::debug!(%type_id, %id, "inserted root block");
        Ok(id)
    }

    /// Insert a new child with default attributes, enforcing both the
    /// parent's allow-list and the child's parent restriction.
    pub fn insert_child(&mut self, parent: Uuid, type_id: &str) -> Result<Uuid> {
        let registry = self.registry;
        let child_schema = registry.schema(type_id)?;

        let parent_block = self.get(parent)?;
        let parent_type = parent_block.type_id().to_string();
        let parent_schema = registry.schema(&parent_type)?;

        let allowed = parent_schema.allows_child(type_id)
            && child_schema
                .parent
                .as_ref()
                .is_none_or(|parents| parents.iter().any(|p| *p == parent_type));
        if !allowed {
            return Err(Error::ChildNotAllowed {
                parent: parent_type,
                child: type_id.to_string(),
            });
        }

        let block = BlockInstance::new(child_schema);
        let id = block.id();
        self.find_mut(parent)
            .expect("parent looked up above")
            .push_child(block);
        tracing::debug!(%type_id, %id, parent = %parent, "inserted child block");
        Ok(id)
    }

    /// Remove a block (and its subtree) from anywhere in the tree.
    pub fn remove(&mut self, id: Uuid) -> Result<BlockInstance> {
        if let Some(index) = self.roots.iter().position(|root| root.id() == id) {
            tracing::debug!(%id, "removed root block");
            return Ok(self.roots.remove(index));
        }
        for root in &mut self.roots {
            if let Some(removed) = root.remove_descendant(id) {
                tracing::debug!(%id, "removed block");
                return Ok(removed);
            }
        }
        Err(Error::BlockNotFound { id })
    }

    /// Apply attribute updates to one block, atomically.
    pub fn set_attributes<'a>(
        &mut self,
        id: Uuid,
        updates: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Result<()> {
        let registry = self.registry;
        let block = self.find_mut(id).ok_or(Error::BlockNotFound { id })?;
        let schema = registry.schema(block.type_id())?;
        block.set_attributes(schema, updates)?;
        tracing::debug!(%id, "updated attributes");
        Ok(())
    }

    /// Flip a boolean attribute, returning the new value.
    pub fn toggle(&mut self, id: Uuid, name: &str) -> Result<bool> {
        let registry = self.registry;
        let block = self.get(id)?;
        let schema = registry.schema(block.type_id())?;
        let next = !block.resolved(schema).bool(name);
        self.set_attributes(id, [(name, Value::Bool(next))])?;
        Ok(next)
    }

    /// Set or clear the block's alignment.
    pub fn set_alignment(&mut self, id: Uuid, align: Option<&str>) -> Result<()> {
        let value = match align {
            Some(align) => json!(align),
            None => Value::Null,
        };
        self.set_attributes(id, [("align", value)])
    }

    /// Run a media pick against the block's `url`/`id` attributes.
    ///
    /// Returns `false` when the user dismissed the dialog; the block is
    /// untouched in that case. A pick with an empty URL clears both
    /// attributes back to their defaults (the explicit "remove image"
    /// answer); any other pick sets both atomically.
    pub async fn select_media(
        &mut self,
        id: Uuid,
        provider: &dyn MediaProvider,
    ) -> Result<bool> {
        // Resolve the block before suspending so a bad id fails fast.
        self.get(id)?;

        match provider.pick(MediaKind::Image).await {
            None => Ok(false),
            Some(media) if media.url.is_empty() => {
                self.set_attributes(id, [("url", Value::Null), ("id", Value::Null)])?;
                Ok(true)
            }
            Some(media) => {
                self.set_attributes(
                    id,
                    [("url", json!(media.url)), ("id", json!(media.id))],
                )?;
                Ok(true)
            }
        }
    }

    /// Expand the block's default-children template if it has none yet.
    ///
    /// Returns the number of children created. Expansion fires only while
    /// the actual child count is zero: once children exist (however many),
    /// re-rendering never regenerates them, so user edits to the template
    /// output survive.
    pub fn ensure_template(&mut self, id: Uuid) -> Result<usize> {
        let registry = self.registry;
        let block = self.get(id)?;
        if !block.children().is_empty() {
            return Ok(0);
        }
        let schema = registry.schema(block.type_id())?;

        let specs: Vec<ChildSpec> = match &schema.template {
            None => return Ok(0),
            Some(Template::Fixed(type_ids)) => type_ids
                .iter()
                .map(|type_id| ChildSpec {
                    type_id: type_id.clone(),
                })
                .collect(),
            Some(Template::Counted { child, count_attr }) => {
                let count = block.resolved(schema).i64(count_attr).unwrap_or(0).max(0) as usize;
                self.templates.counted(child, count).to_vec()
            }
        };

        let mut children = Vec::with_capacity(specs.len());
        for spec in &specs {
            children.push(BlockInstance::new(registry.schema(&spec.type_id)?));
        }
        let created = children.len();

        self.find_mut(id)
            .expect("block looked up above")
            .children_mut()
            .extend(children);
        if created > 0 {
            tracing::debug!(%id, created, "expanded default-children template");
        }
        Ok(created)
    }

    /// Apply a block UI's mount callback to one block.
    pub fn mount(&mut self, id: Uuid, uis: &UiRegistry) -> Result<()> {
        let registry = self.registry;
        let block = self.get(id)?;
        let type_id = block.type_id().to_string();
        let Some(ui) = uis.lookup(&type_id) else {
            return Ok(());
        };
        let schema = registry.schema(&type_id)?;
        let updates = ui.on_mount(&block.resolved(schema));
        if !updates.is_empty() {
            let updates: Vec<(&str, Value)> = updates
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone()))
                .collect();
            self.set_attributes(id, updates)?;
        }
        Ok(())
    }

    /// Apply mount callbacks to every block in the tree, in tree order.
    pub fn mount_all(&mut self, uis: &UiRegistry) -> Result<()> {
        let mut ids = Vec::new();
        collect_ids(&self.roots, &mut ids);
        for id in ids {
            self.mount(id, uis)?;
        }
        Ok(())
    }

    /// Describe the editing UI for one block, if its type has one.
    pub fn edit_view(&self, id: Uuid, uis: &UiRegistry) -> Result<Option<EditView>> {
        let block = self.get(id)?;
        let Some(ui) = uis.lookup(block.type_id()) else {
            return Ok(None);
        };
        let schema = self.registry.schema(block.type_id())?;
        Ok(Some(ui.edit(&block.resolved(schema))))
    }

    /// Serialize the whole tree to persisted markup.
    pub fn serialize(&self) -> Result<String> {
        Ok(serialize_document(&self.roots, self.registry)?)
    }
}

fn collect_ids(blocks: &[BlockInstance], out: &mut Vec<Uuid>) {
    for block in blocks {
        out.push(block.id());
        collect_ids(block.children(), out);
    }
}
