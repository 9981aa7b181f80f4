//! The Accordion block: a definition list of collapsible items with a
//! configurable item count.

use breeze_core::{derive_class_names, AttrSpec, BlockSchema, BlockType, ResolvedAttrs, Template};
use breeze_editor::{BlockUi, EditView, InspectorControl, InspectorPanel};
use breeze_markup::{Element, Node};

pub const TYPE_ID: &str = "breezeblocks/accordion";

const BLOCK_CLASS: &str = "wp-block-breezeblocks-accordion";

/// Item-count bounds exposed on the range control.
const MIN_ITEMS: i64 = 2;
const MAX_ITEMS: i64 = 10;

pub struct Accordion {
    schema: BlockSchema,
}

impl Accordion {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Accordion")
                .attr(AttrSpec::number("items").with_default(2))
                .allow_children(&[crate::accordion_item::TYPE_ID])
                .with_template(Template::Counted {
                    child: crate::accordion_item::TYPE_ID.to_string(),
                    count_attr: "items".to_string(),
                }),
        }
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Accordion {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, _attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        let classes = derive_class_names(&[BLOCK_CLASS, "accordion"], &[]);
        vec![Element::new("dl").class_list(&classes).slot().into_node()]
    }
}

impl BlockUi for Accordion {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        // The frontend accordion script hooks onto the badger classes; the
        // editor preview carries them so styling matches.
        let mut view = EditView::new(derive_class_names(
            &[
                BLOCK_CLASS,
                "accordion",
                "badger-accordion",
                "js-badger-accordion",
            ],
            &[],
        ));
        view.inspector = vec![InspectorPanel::untitled(vec![InspectorControl::Range {
            label: "Items".to_string(),
            value: attrs.i64("items").unwrap_or(MIN_ITEMS),
            min: MIN_ITEMS,
            max: MAX_ITEMS,
        }])];
        view.body = vec![Element::new("dl").slot().into_node()];
        view
    }
}
