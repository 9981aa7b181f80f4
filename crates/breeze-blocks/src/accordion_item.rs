//! The Accordion Item block: a heading/panel pair inside an accordion.

use breeze_core::{AttrSpec, BlockSchema, BlockType, ResolvedAttrs};
use breeze_editor::{BlockUi, EditView};
use breeze_markup::{Element, Node};
use serde_json::{json, Value};

pub const TYPE_ID: &str = "breezeblocks/accordion-item";

const TITLE_CLASS: &str = "accordion__title";

pub struct AccordionItem {
    schema: BlockSchema,
}

impl AccordionItem {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Accordion Item")
                .attr(
                    AttrSpec::string("title")
                        .with_default("")
                        .from_text(".accordion__title"),
                )
                .attr(AttrSpec::string("anchor"))
                .with_parent(&[crate::accordion::TYPE_ID])
                .allow_children(&["core/paragraph"]),
        }
    }
}

impl Default for AccordionItem {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for AccordionItem {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        let title = attrs.str("title").unwrap_or_default();

        vec![
            Element::new("dt")
                .attr("class", "accordion__heading")
                .child(
                    Element::new("button")
                        .attr("class", "accordion__trigger js-badger-accordion-header")
                        .child(
                            Element::new("div")
                                .attr("class", TITLE_CLASS)
                                .text(title)
                                .into_node(),
                        )
                        .into_node(),
                )
                .into_node(),
            Element::new("dd")
                .attr(
                    "class",
                    "accordion__panel badger-accordion__panel js-badger-accordion-panel",
                )
                .child(
                    Element::new("div")
                        .attr("class", "accordion__panel-inner js-badger-accordion-panel-inner")
                        .slot()
                        .into_node(),
                )
                .into_node(),
        ]
    }
}

impl BlockUi for AccordionItem {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        let title = attrs.str("title").unwrap_or_default();

        let mut view = EditView::new(Vec::new());
        view.body = vec![
            Element::new("dt")
                .attr("class", "accordion__heading")
                .child(
                    Element::new("div")
                        .attr("class", "accordion__trigger js-badger-accordion-header")
                        .child(
                            Element::new("div")
                                .attr("class", TITLE_CLASS)
                                .text(title)
                                .into_node(),
                        )
                        .into_node(),
                )
                .into_node(),
            Element::new("dd")
                .attr("class", "accordion__panel")
                .child(
                    Element::new("div")
                        .attr("class", "accordion__panel-inner")
                        .slot()
                        .into_node(),
                )
                .into_node(),
        ];
        view
    }

    /// Assign a stable anchor id the first time the item enters the tree.
    fn on_mount(&self, attrs: &ResolvedAttrs<'_>) -> Vec<(String, Value)> {
        if attrs.is_set("anchor") {
            return Vec::new();
        }
        let slug: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(9)
            .collect();
        vec![("anchor".to_string(), json!(slug))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeze_core::BlockInstance;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn save_emits_title_at_the_selector_target() {
        let item = AccordionItem::new();
        let block =
            BlockInstance::with_attrs(item.schema(), [("title", json!("Opening hours"))]).unwrap();
        let nodes = item.save(&block.resolved(item.schema()));

        assert_eq!(nodes.len(), 2);
        let rendered = nodes[0].render();
        assert!(rendered.contains("<div class=\"accordion__title\">Opening hours</div>"));
    }

    #[test]
    fn children_render_inside_the_panel() {
        let item = AccordionItem::new();
        let block = BlockInstance::new(item.schema());
        let nodes = item.save(&block.resolved(item.schema()));

        let dd = nodes[1].render_with_slot("CONTENT");
        assert!(dd.starts_with("<dd class=\"accordion__panel"));
        assert!(dd.contains(">CONTENT</div>"));
    }

    #[test]
    fn mount_assigns_anchor_only_once() {
        let item = AccordionItem::new();
        let mut block = BlockInstance::new(item.schema());

        let updates = item.on_mount(&block.resolved(item.schema()));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "anchor");
        assert_eq!(updates[0].1.as_str().unwrap().len(), 9);

        let updates: Vec<(&str, Value)> = updates
            .iter()
            .map(|(n, v)| (n.as_str(), v.clone()))
            .collect();
        block.set_attributes(item.schema(), updates).unwrap();
        assert!(item.on_mount(&block.resolved(item.schema())).is_empty());
    }
}
