//! Lenient-deserialization tests: hand-edited or stale markup degrades to
//! schema defaults with warnings instead of failing the load.

use breeze_core::{
    deserialize, parse_document, AttrSpec, BlockRegistry, BlockSchema, BlockType, ParseWarning,
    ResolvedAttrs,
};
use breeze_markup::{Element, Node};
use pretty_assertions::assert_eq;
use serde_json::json;

/// A card with a markup-sourced title and a couple of metadata attributes.
struct Card {
    schema: BlockSchema,
}

impl Card {
    fn new() -> Self {
        Self {
            schema: BlockSchema::new("demo/card", "Card")
                .attr(AttrSpec::string("title").with_default("Untitled").from_text(".heading"))
                .attr(AttrSpec::number("columns").with_default(1))
                .attr(AttrSpec::string("tone").with_default(""))
                .allow_children(&["demo/card"]),
        }
    }
}

impl BlockType for Card {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("div")
            .attr("class", "card")
            .child(
                Element::new("h2")
                    .attr("class", "heading")
                    .text(attrs.str("title").unwrap_or_default())
                    .into_node(),
            )
            .slot()
            .into_node()]
    }
}

fn registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    registry.register(Box::new(Card::new())).unwrap();
    registry
}

#[test]
fn missing_selector_target_falls_back_to_default() {
    let registry = registry();
    // Hand-edited markup: the .heading element is gone entirely.
    let fragment = "<!-- blk:demo/card -->\n<div class=\"card\"></div>\n<!-- /blk:demo/card -->";

    let parsed = deserialize(fragment, &registry).unwrap();
    let schema = registry.schema("demo/card").unwrap();
    assert_eq!(parsed.block.resolved(schema).str("title"), Some("Untitled"));
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::MissingMarkupSource {
            type_id: "demo/card".to_string(),
            name: "title".to_string(),
            selector: ".heading".to_string(),
        }]
    );
}

#[test]
fn invalid_metadata_falls_back_to_defaults() {
    let registry = registry();
    let fragment =
        "<!-- blk:demo/card {not json} -->\n<div class=\"card\"><h2 class=\"heading\">Kept</h2></div>\n<!-- /blk:demo/card -->";

    let parsed = deserialize(fragment, &registry).unwrap();
    let schema = registry.schema("demo/card").unwrap();
    // Markup-sourced extraction still works; metadata attributes default.
    assert_eq!(parsed.block.resolved(schema).str("title"), Some("Kept"));
    assert_eq!(parsed.block.resolved(schema).i64("columns"), Some(1));
    assert!(matches!(
        parsed.warnings.as_slice(),
        [ParseWarning::InvalidMeta { type_id, .. }] if type_id == "demo/card"
    ));
}

#[test]
fn unknown_metadata_key_is_ignored_with_warning() {
    let registry = registry();
    let fragment = concat!(
        "<!-- blk:demo/card {\"legacy\":true,\"tone\":\"bold\"} -->\n",
        "<div class=\"card\"><h2 class=\"heading\">T</h2></div>\n",
        "<!-- /blk:demo/card -->",
    );

    let parsed = deserialize(fragment, &registry).unwrap();
    let schema = registry.schema("demo/card").unwrap();
    assert_eq!(parsed.block.resolved(schema).str("tone"), Some("bold"));
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::UnknownAttribute {
            type_id: "demo/card".to_string(),
            name: "legacy".to_string(),
        }]
    );
}

#[test]
fn type_mismatched_metadata_value_falls_back_to_default() {
    let registry = registry();
    let fragment = concat!(
        "<!-- blk:demo/card {\"columns\":\"three\"} -->\n",
        "<div class=\"card\"><h2 class=\"heading\">T</h2></div>\n",
        "<!-- /blk:demo/card -->",
    );

    let parsed = deserialize(fragment, &registry).unwrap();
    let schema = registry.schema("demo/card").unwrap();
    assert_eq!(parsed.block.resolved(schema).i64("columns"), Some(1));
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::TypeMismatch {
            type_id: "demo/card".to_string(),
            name: "columns".to_string(),
            expected: "number",
            found: "string".to_string(),
        }]
    );
}

#[test]
fn unknown_region_is_skipped_and_document_still_loads() {
    let registry = registry();
    let source = concat!(
        "<!-- blk:demo/card -->\n<div class=\"card\"><h2 class=\"heading\">A</h2></div>\n<!-- /blk:demo/card -->\n\n",
        "<!-- blk:legacy/widget {\"x\":1} -->\n<div></div>\n<!-- /blk:legacy/widget -->\n\n",
        "<!-- blk:demo/card -->\n<div class=\"card\"><h2 class=\"heading\">B</h2></div>\n<!-- /blk:demo/card -->",
    );

    let document = parse_document(source, &registry);
    assert_eq!(document.blocks.len(), 2);
    assert_eq!(
        document.warnings,
        vec![ParseWarning::UnknownType {
            type_id: "legacy/widget".to_string(),
        }]
    );

    let schema = registry.schema("demo/card").unwrap();
    let titles: Vec<_> = document
        .blocks
        .iter()
        .map(|b| b.resolved(schema).str("title").unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn unterminated_region_is_reported_and_skipped() {
    let registry = registry();
    let source = concat!(
        "<!-- blk:demo/card -->\n<div class=\"card\"><h2 class=\"heading\">A</h2></div>\n<!-- /blk:demo/card -->\n\n",
        "<!-- blk:demo/card -->\n<div>half a region",
    );

    let document = parse_document(source, &registry);
    assert_eq!(document.blocks.len(), 1);
    assert_eq!(
        document.warnings,
        vec![ParseWarning::MalformedFrame {
            type_id: "demo/card".to_string(),
            message: "region is never closed".to_string(),
        }]
    );
}

#[test]
fn unknown_child_is_skipped_but_parent_survives() {
    let registry = registry();
    let fragment = concat!(
        "<!-- blk:demo/card -->\n",
        "<div class=\"card\"><h2 class=\"heading\">Parent</h2>\n",
        "<!-- blk:legacy/widget -->\n<p></p>\n<!-- /blk:legacy/widget -->\n",
        "</div>\n",
        "<!-- /blk:demo/card -->",
    );

    let parsed = deserialize(fragment, &registry).unwrap();
    assert_eq!(parsed.block.children().len(), 0);
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::UnknownType {
            type_id: "legacy/widget".to_string(),
        }]
    );
}

#[test]
fn disallowed_child_is_kept_with_warning() {
    let mut registry = registry();

    struct Aside(BlockSchema);
    impl BlockType for Aside {
        fn schema(&self) -> &BlockSchema {
            &self.0
        }
        fn save(&self, _attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
            vec![Element::new("aside").into_node()]
        }
    }
    registry
        .register(Box::new(Aside(BlockSchema::new("demo/aside", "Aside"))))
        .unwrap();

    // demo/card only allows demo/card children.
    let fragment = concat!(
        "<!-- blk:demo/card -->\n",
        "<div class=\"card\"><h2 class=\"heading\">P</h2>\n",
        "<!-- blk:demo/aside -->\n<aside></aside>\n<!-- /blk:demo/aside -->\n",
        "</div>\n",
        "<!-- /blk:demo/card -->",
    );

    let parsed = deserialize(fragment, &registry).unwrap();
    assert_eq!(parsed.block.children().len(), 1);
    assert_eq!(
        parsed.warnings,
        vec![ParseWarning::DisallowedChild {
            parent: "demo/card".to_string(),
            child: "demo/aside".to_string(),
        }]
    );
}

#[test]
fn scenario_from_metadata_only_markup() {
    // A fragment with partial metadata resolves the remaining attributes
    // from their defaults.
    struct Strip(BlockSchema);
    impl BlockType for Strip {
        fn schema(&self) -> &BlockSchema {
            &self.0
        }
        fn save(&self, _attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
            vec![Element::new("div").attr("class", "strip").slot().into_node()]
        }
    }

    let mut registry = BlockRegistry::new();
    registry
        .register(Box::new(Strip(
            BlockSchema::new("demo/strip", "Strip")
                .attr(AttrSpec::string("align").with_default("full"))
                .attr(AttrSpec::boolean("reversed").with_default(false)),
        )))
        .unwrap();

    let fragment = concat!(
        "<!-- blk:demo/strip {\"align\":\"wide\"} -->\n",
        "<div class=\"strip\"></div>\n",
        "<!-- /blk:demo/strip -->",
    );
    let parsed = deserialize(fragment, &registry).unwrap();
    assert_eq!(parsed.warnings, vec![]);

    let schema = registry.schema("demo/strip").unwrap();
    let attrs = parsed.block.resolved(schema);
    assert_eq!(attrs.str("align"), Some("wide"));
    assert_eq!(attrs.bool("reversed"), false);
    assert_eq!(parsed.block.overrides().get("align"), Some(&json!("wide")));
    assert!(!attrs.is_set("reversed"));
}
