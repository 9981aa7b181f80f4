//! Markup node tree and rendering.
//!
//! Save renderers build [`Node`] trees instead of strings so that the
//! serializer can splice nested block content at the [`Node::ChildrenSlot`]
//! and so tests can assert on structure rather than formatting.

use serde::{Deserialize, Serialize};

/// A node in a markup fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// An element with a tag name, ordered attributes, and child nodes.
    Element(Element),
    /// A run of text. Stored unescaped; entity-encoded on render.
    Text(String),
    /// The single position where a container block's nested children are
    /// spliced in during serialization. Renders to nothing on its own.
    ChildrenSlot,
}

impl Node {
    /// Render the node to markup with nothing at the children slot.
    pub fn render(&self) -> String {
        self.render_with_slot("")
    }

    /// Render the node to markup, emitting `slot` at the children slot.
    pub fn render_with_slot(&self, slot: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, slot);
        out
    }

    fn render_into(&self, out: &mut String, slot: &str) {
        match self {
            Node::Text(text) => {
                out.push_str(&html_escape::encode_text(text));
            }
            Node::ChildrenSlot => {
                out.push_str(slot);
            }
            Node::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');
                for child in &element.children {
                    child.render_into(out, slot);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    /// The element behind this node, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Whether this tree contains a [`Node::ChildrenSlot`].
    pub fn contains_slot(&self) -> bool {
        match self {
            Node::ChildrenSlot => true,
            Node::Text(_) => false,
            Node::Element(element) => element.children.iter().any(Node::contains_slot),
        }
    }
}

/// An element with ordered attributes and children.
///
/// Attributes are an ordered sequence of `(name, value)` pairs, not a map:
/// rendering must be byte-identical across runs, so nothing in this crate
/// may depend on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a `class` attribute from an already-derived class list.
    ///
    /// Empty lists emit no attribute at all, mirroring how the editor
    /// omits `class` when no class applies.
    pub fn class_list(self, classes: &[String]) -> Self {
        if classes.is_empty() {
            self
        } else {
            self.attr("class", classes.join(" "))
        }
    }

    /// Append a child node.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append the children slot.
    pub fn slot(self) -> Self {
        self.child(Node::ChildrenSlot)
    }

    /// Wrap into a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    /// Look up an attribute value by name. First occurrence wins.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element's `class` attribute contains the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|v| v.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
            Node::ChildrenSlot => {}
        }
    }
}
