//! The Button Group block: an inline row of buttons.

use breeze_core::{derive_class_names, AttrSpec, BlockSchema, BlockType, ResolvedAttrs, Template};
use breeze_editor::{align_wrapper, BlockUi, EditView, ToolbarControl};
use breeze_markup::{Element, Node};

pub const TYPE_ID: &str = "breezeblocks/button-group";

const BLOCK_CLASS: &str = "wp-block-breezeblocks-button-group";

pub struct ButtonGroup {
    schema: BlockSchema,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Button Group")
                .attr(AttrSpec::string("align").with_default("center"))
                .allow_children(&["core/button"])
                .with_template(Template::Fixed(vec![
                    "core/button".to_string(),
                    "core/button".to_string(),
                ])),
        }
    }

    fn classes(attrs: &ResolvedAttrs<'_>) -> Vec<String> {
        let align = attrs.str("align").unwrap_or_default();
        let align_class = format!("is-align-{align}");
        derive_class_names(&[BLOCK_CLASS], &[(&align_class, !align.is_empty())])
    }
}

impl Default for ButtonGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for ButtonGroup {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("div")
            .class_list(&Self::classes(attrs))
            .slot()
            .into_node()]
    }
}

impl BlockUi for ButtonGroup {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        let mut view = EditView::new(Self::classes(attrs));
        view.wrapper = align_wrapper(attrs.str("align"));
        view.toolbar = vec![ToolbarControl::Alignment {
            value: attrs.str("align").map(String::from),
            controls: vec![
                "left".to_string(),
                "center".to_string(),
                "right".to_string(),
            ],
        }];
        view.body = vec![Element::new("div").slot().into_node()];
        view
    }
}
