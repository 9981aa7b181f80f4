//! Minimal text blocks for the `core/*` types the layout blocks nest.
//!
//! The allow-lists and templates of the layout blocks reference the host
//! platform's heading, paragraph, button, and list blocks. These
//! definitions carry just enough schema for documents using them to
//! round-trip; rich-text editing of their content is the host's concern.

use breeze_core::{AttrSpec, BlockRegistry, BlockSchema, BlockType, ResolvedAttrs, Result};
use breeze_markup::{Element, Node};

pub const HEADING: &str = "core/heading";
pub const PARAGRAPH: &str = "core/paragraph";
pub const BUTTON: &str = "core/button";
pub const LIST: &str = "core/list";

/// Register all four text blocks.
pub fn register(registry: &mut BlockRegistry) -> Result<()> {
    registry.register(Box::new(Heading::new()))?;
    registry.register(Box::new(Paragraph::new()))?;
    registry.register(Box::new(Button::new()))?;
    registry.register(Box::new(List::new()))?;
    Ok(())
}

pub struct Heading {
    schema: BlockSchema,
}

impl Heading {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(HEADING, "Heading")
                .attr(AttrSpec::string("content").with_default("").from_text("h2"))
                .leaf(),
        }
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Heading {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("h2")
            .text(attrs.str("content").unwrap_or_default())
            .into_node()]
    }
}

pub struct Paragraph {
    schema: BlockSchema,
}

impl Paragraph {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(PARAGRAPH, "Paragraph")
                .attr(AttrSpec::string("content").with_default("").from_text("p"))
                .leaf(),
        }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Paragraph {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("p")
            .text(attrs.str("content").unwrap_or_default())
            .into_node()]
    }
}

pub struct Button {
    schema: BlockSchema,
}

impl Button {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(BUTTON, "Button")
                .attr(
                    AttrSpec::string("text")
                        .with_default("")
                        .from_text(".wp-block-button__link"),
                )
                .attr(AttrSpec::string("url").from_attribute(".wp-block-button__link", "href"))
                .leaf(),
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for Button {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        let mut link = Element::new("a").attr("class", "wp-block-button__link");
        if let Some(url) = attrs.str("url") {
            link = link.attr("href", url);
        }
        vec![Element::new("div")
            .attr("class", "wp-block-button")
            .child(link.text(attrs.str("text").unwrap_or_default()).into_node())
            .into_node()]
    }
}

pub struct List {
    schema: BlockSchema,
}

impl List {
    pub fn new() -> Self {
        Self {
            schema: BlockSchema::new(LIST, "List")
                .attr(AttrSpec::string("values").with_default("").from_text("ul"))
                .leaf(),
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for List {
    fn schema(&self) -> &BlockSchema {
        &self.schema
    }

    fn save(&self, attrs: &ResolvedAttrs<'_>) -> Vec<Node> {
        vec![Element::new("ul")
            .text(attrs.str("values").unwrap_or_default())
            .into_node()]
    }
}
