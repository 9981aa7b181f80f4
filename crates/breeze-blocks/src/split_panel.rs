//! The Split Panel block: an image beside a content column, reversible.

use breeze_core::{derive_class_names, AttrSpec, BlockSchema, BlockType, ResolvedAttrs};
use breeze_editor::{
    align_wrapper, BlockUi, EditView, InspectorControl, InspectorPanel, ToolbarControl,
};
use breeze_markup::{Element, Node};

pub const TYPE_ID: &str = "breezeblocks/block-split-panel";

const BLOCK_CLASS: &str = "wp-block-breezeblocks-block-split-panel";

pub struct SplitPanel {
    schema: BlockSchema,
}

impl SplitPanel {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Split Panel")
                .attr(AttrSpec::string("align"))
                .attr(AttrSpec::boolean("reversed").with_default(false))
                .attr(AttrSpec::string("url"))
                .attr(AttrSpec::number("id"))
                .allow_children(&["core/heading", "core/paragraph", "core/button"]),
        }
    }

    fn classes(attrs: &ResolvedAttrs<'_>) -> Vec<String> {
        let align = attrs.str("align").unwrap_or_default();
        let align_class = format!("align{align}");
        derive_class_names(
            &[BLOCK_CLASS, "split-panel"],
            &[
                ("split-panel--reversed", attrs.bool("reversed")),
                (&align_class, !align.is_empty()),
            ],
        )
    }

    fn image_element(attrs: &ResolvedAttrs<'_>) -> Element {
        let image = Element::new("div").attr("class", "split-panel__image");
        match attrs.str("url") {
            Some(url) => image.attr("style", format!("background-image:url({url})")),
            None => image,
        }
    }
}

impl Default for SplitPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for SplitPanel {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("div")
            .class_list(&Self::classes(attrs))
            .child(Self::image_element(attrs).into_node())
            .child(
                Element::new("div")
                    .attr("class", "split-panel__box")
                    .child(
                        Element::new("div")
                            .attr("class", "split-panel__content")
                            .slot()
                            .into_node(),
                    )
                    .into_node(),
            )
            .into_node()]
    }
}

impl BlockUi for SplitPanel {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        let mut view = EditView::new(Self::classes(attrs));
        view.wrapper = align_wrapper(attrs.str("align"));
        view.toolbar = vec![
            ToolbarControl::Alignment {
                value: attrs.str("align").map(String::from),
                controls: vec!["wide".to_string(), "full".to_string()],
            },
            ToolbarControl::MediaButton {
                label: "Edit image".to_string(),
                media_id: attrs.i64("id"),
            },
        ];
        view.inspector = vec![InspectorPanel::untitled(vec![InspectorControl::Toggle {
            label: "Reverse Layout".to_string(),
            checked: attrs.bool("reversed"),
        }])];
        view.body = vec![Element::new("div")
            .class_list(&Self::classes(attrs))
            .child(Self::image_element(attrs).into_node())
            .child(
                Element::new("div")
                    .attr("class", "split-panel__box")
                    .child(
                        Element::new("div")
                            .attr("class", "split-panel__content")
                            .slot()
                            .into_node(),
                    )
                    .into_node(),
            )
            .into_node()];
        view
    }
}
