//! The Tile block: a linked, color- or image-backed card with templated
//! heading and paragraph content.

use crate::colors::{background_color_class, text_color_class};
use breeze_core::{
    derive_class_names, AttrSpec, BlockSchema, BlockType, ResolvedAttrs, Template,
};
use breeze_editor::{
    BlockUi, EditView, InspectorControl, InspectorPanel, SelectOption, ToolbarControl,
};
use breeze_markup::{Element, Node};

pub const TYPE_ID: &str = "breezeblocks/tile";

const BLOCK_CLASS: &str = "wp-block-breezeblocks-tile";
const LINK_CLASS: &str = "wp-block-breezeblocks-tile__link";
const CONTENT_CLASS: &str = "wp-block-breezeblocks-tile__content";

pub struct Tile {
    schema: BlockSchema,
}

impl Tile {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(TYPE_ID, "Tile")
                .attr(AttrSpec::string("backgroundType").with_default("color"))
                .attr(AttrSpec::string("link").from_attribute("a", "href"))
                .attr(AttrSpec::string("url"))
                .attr(AttrSpec::number("id"))
                .attr(AttrSpec::string("ratio").with_default("square"))
                .attr(AttrSpec::string("backgroundColor").with_default(""))
                .attr(AttrSpec::string("textColor").with_default(""))
                .allow_children(&["core/heading", "core/paragraph", "core/button", "core/list"])
                .with_template(Template::Fixed(vec![
                    "core/heading".to_string(),
                    "core/paragraph".to_string(),
                ])),
        }
    }

    fn color_classes(attrs: &ResolvedAttrs<'_>) -> Vec<String> {
        let background = attrs.str("backgroundColor").unwrap_or_default();
        let text = attrs.str("textColor").unwrap_or_default();
        derive_class_names(
            &[BLOCK_CLASS],
            &[
                ("has-background", !background.is_empty()),
                (&background_color_class(background), true),
                (&text_color_class(text), true),
            ],
        )
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Tile {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        let mut outer = Element::new("div").class_list(&Self::color_classes(attrs));
        if let Some(url) = attrs.str("url") {
            outer = outer.attr("style", format!("background-image:url({url})"));
        }

        let mut link = Element::new("a").attr("class", LINK_CLASS);
        if let Some(href) = attrs.str("link") {
            link = link.attr("href", href);
        }

        vec![outer
            .child(
                link.child(
                    Element::new("div")
                        .attr("class", CONTENT_CLASS)
                        .slot()
                        .into_node(),
                )
                .into_node(),
            )
            .into_node()]
    }
}

impl BlockUi for Tile {
    fn type_id(&self) -> &str {
        TYPE_ID
    }

    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView {
        let ratio = attrs.str("ratio").unwrap_or_default();
        let ratio_class = format!("is-ratio-{ratio}");
        let background = attrs.str("backgroundColor").unwrap_or_default();
        let text = attrs.str("textColor").unwrap_or_default();

        let mut view = EditView::new(derive_class_names(
            &[BLOCK_CLASS],
            &[
                ("has-background", !background.is_empty()),
                (&background_color_class(background), true),
                (&text_color_class(text), true),
                (&ratio_class, !ratio.is_empty()),
            ],
        ));
        view.toolbar = vec![ToolbarControl::MediaButton {
            label: "Edit image".to_string(),
            media_id: attrs.i64("id"),
        }];
        view.inspector = vec![
            InspectorPanel::titled(
                "Background Settings",
                vec![InspectorControl::Select {
                    label: "Background Type".to_string(),
                    value: attrs.str("backgroundType").unwrap_or_default().to_string(),
                    options: vec![
                        SelectOption::new("color", "Color"),
                        SelectOption::new("image", "Image"),
                    ],
                }],
            ),
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
            InspectorPanel::titled(
                "Layout Settings",
                vec![InspectorControl::Select {
                    label: "Ratio".to_string(),
                    value: ratio.to_string(),
                    options: vec![
                        SelectOption::new("square", "Square"),
                        SelectOption::new("16by9", "Widescreen"),
                    ],
                }],
            ),
            InspectorPanel::untitled(vec![InspectorControl::UrlInput {
                value: attrs.str("link").map(String::from),
            }]),
        ];

        let mut body_outer = Element::new("div");
        if let Some(url) = attrs.str("url") {
            body_outer = body_outer.attr("style", format!("background-image:url({url})"));
        }
        view.body = vec![body_outer
            .child(
                Element::new("div")
                    .attr("class", LINK_CLASS)
                    .child(
                        Element::new("div")
                            .attr("class", CONTENT_CLASS)
                            .slot()
                            .into_node(),
                    )
                    .into_node(),
            )
            .into_node()];
        view
    }
}
