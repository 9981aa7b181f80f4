//! Serialization of block instances into persisted markup.

use crate::error::Result;
use crate::instance::BlockInstance;
use crate::registry::BlockRegistry;
use crate::schema::AttrSource;
use breeze_markup::{frame, Node};
use serde_json::Map;

/// Serialize one block instance into its comment-framed markup region.
///
/// Explicit (metadata-sourced) attribute overrides go into the opening
/// marker's JSON object in schema declaration order (`serde_json` keeps
/// object keys sorted, so the header is byte-deterministic). Markup-sourced
/// attributes are emitted by the block's save renderer. Children serialize
/// recursively and are spliced at the renderer's children slot; a renderer
/// without a slot gets them appended after its static markup so no content
/// is ever dropped.
///
/// # Errors
/// Fails with `UnknownType` when the instance (or any descendant) has no
/// registered block type.
pub fn serialize(instance: &BlockInstance, registry: &BlockRegistry) -> Result<String> {
    let block_type = registry.lookup(instance.type_id())?;
    let schema = block_type.schema();

    let mut meta = Map::new();
    for spec in &schema.attributes {
        if spec.source == AttrSource::Meta {
            if let Some(value) = instance.overrides().get(&spec.name) {
                meta.insert(spec.name.clone(), value.clone());
            }
        }
    }
    let meta_json = (!meta.is_empty()).then(|| frame::encode_meta(&meta));

    let rendered_children = instance
        .children()
        .iter()
        .map(|child| serialize(child, registry))
        .collect::<Result<Vec<_>>>()?
        .join("\n");

    let save_nodes = block_type.save(&instance.resolved(schema));
    let has_slot = save_nodes.iter().any(Node::contains_slot);

    let mut body = String::new();
    for node in &save_nodes {
        body.push_str(&node.render_with_slot(&rendered_children));
    }
    if !has_slot && !rendered_children.is_empty() {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&rendered_children);
    }

    Ok(frame::compose(
        &schema.type_id,
        meta_json.as_deref(),
        &body,
    ))
}

/// Serialize a sequence of top-level blocks into one document.
pub fn serialize_document(blocks: &[BlockInstance], registry: &BlockRegistry) -> Result<String> {
    let regions = blocks
        .iter()
        .map(|block| serialize(block, registry))
        .collect::<Result<Vec<_>>>()?;
    Ok(regions.join("\n\n"))
}
