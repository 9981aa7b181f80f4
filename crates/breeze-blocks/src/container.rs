//! The Container block: a full-width section with background and text
//! color options for nesting other blocks.

use crate::colors::{background_color_class, text_color_class};
use breeze_core::{derive_class_names, AttrSpec, BlockSchema, BlockType, ResolvedAttrs};
use breeze_editor::{
    align_wrapper, BlockUi, EditView, InspectorControl, InspectorPanel, ToolbarControl,
};
use breeze_markup::{Element, Node};

pub const TYPE_ID: &str = "breezeblocks/container";

const BLOCK_CLASS: &str = "wp-block-breezeblocks-container";
const CONTENT_CLASS: &str = "wp-block-breezeblocks-container__content";

pub struct Container {
    schema: BlockSchema,
}

impl Container {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Container")
                .attr(AttrSpec::string("align").with_default("full"))
                .attr(AttrSpec::string("backgroundColor").with_default(""))
                .attr(AttrSpec::string("textColor").with_default("")),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Container {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        let align = attrs.str("align").unwrap_or_default();
        let background = attrs.str("backgroundColor").unwrap_or_default();
        let text = attrs.str("textColor").unwrap_or_default();

        let align_class = format!("align{align}");
        let classes = derive_class_names(
            &[BLOCK_CLASS],
            &[
                (&align_class, !align.is_empty()),
                ("has-background", !background.is_empty()),
                (&background_color_class(background), true),
            ],
        );
        let content_classes =
            derive_class_names(&[CONTENT_CLASS], &[(&text_color_class(text), true)]);

        vec![Element::new("div")
            .class_list(&classes)
            .child(
                Element::new("div")
                    .class_list(&content_classes)
                    .slot()
                    .into_node(),
            )
            .into_node()]
    }
}

impl BlockUi for Container {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        let align = attrs.str("align").unwrap_or_default();
        let background = attrs.str("backgroundColor").unwrap_or_default();
        let text = attrs.str("textColor").unwrap_or_default();

        let align_class = format!("align{align}");
        let mut view = EditView::new(derive_class_names(
            &[BLOCK_CLASS],
            &[
                ("has-background", !background.is_empty()),
                (&background_color_class(background), true),
                (&text_color_class(text), true),
                (&align_class, !align.is_empty()),
            ],
        ));
        view.wrapper = align_wrapper(attrs.str("align"));
        view.toolbar = vec![ToolbarControl::Alignment {
            value: attrs.str("align").map(String::from),
            controls: vec!["wide".to_string(), "full".to_string()],
        }];
        view.inspector = vec![
            InspectorPanel::titled(
                "Background Color",
                vec![InspectorControl::ColorPicker {
                    label: "Background Color".to_string(),
                    value: background.to_string(),
                }],
            ),
            InspectorPanel::titled(
                "Text Color",
                vec![InspectorControl::ColorPicker {
                    label: "Text Color".to_string(),
                    value: text.to_string(),
                }],
            ),
        ];
        view.body = vec![Element::new("div")
            .attr("class", CONTENT_CLASS)
            .slot()
            .into_node()];
        view
    }
}
