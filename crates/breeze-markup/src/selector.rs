//! Structural selector paths for attribute extraction.
//!
//! Block schemas designate where a markup-sourced attribute lives with a
//! small selector language: a step is a tag name (`a`), a class
//! (`.accordion__title`), or both (`div.split-panel__image`), and
//! whitespace separates descendant steps (`dt .accordion__title`). The
//! first matching descendant in document order wins.

use crate::error::{Error, Result};
use crate::node::{Element, Node};

/// A parsed selector path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    tag: Option<String>,
    class: Option<String>,
}

impl Step {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag != *tag {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !element.has_class(class) {
                return false;
            }
        }
        true
    }
}

impl Selector {
    /// Parse a selector path.
    pub fn parse(selector: &str) -> Result<Self> {
        let mut steps = Vec::new();
        for part in selector.split_ascii_whitespace() {
            let (tag, class) = match part.split_once('.') {
                Some(("", class)) => (None, Some(class)),
                Some((tag, class)) => (Some(tag), Some(class)),
                None => (Some(part), None),
            };
            if class == Some("") {
                return Err(Error::InvalidSelector {
                    selector: selector.to_string(),
                    message: "empty class step".to_string(),
                });
            }
            steps.push(Step {
                tag: tag.map(|t| t.to_ascii_lowercase()),
                class: class.map(str::to_string),
            });
        }
        if steps.is_empty() {
            return Err(Error::InvalidSelector {
                selector: selector.to_string(),
                message: "selector has no steps".to_string(),
            });
        }
        Ok(Self { steps })
    }

    /// Find the first element matching the full path, searching `nodes` and
    /// all their descendants in document order.
    pub fn find_first<'a>(&self, nodes: &'a [Node]) -> Option<&'a Element> {
        find_match(nodes, &self.steps)
    }
}

fn find_match<'a>(nodes: &'a [Node], steps: &[Step]) -> Option<&'a Element> {
    for node in nodes {
        let Node::Element(element) = node else {
            continue;
        };
        if steps[0].matches(element) {
            if steps.len() == 1 {
                return Some(element);
            }
            if let Some(found) = find_match(&element.children, &steps[1..]) {
                return Some(found);
            }
        }
        // A non-matching element may still contain the match.
        if let Some(found) = find_match(&element.children, steps) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_fragment;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const FRAGMENT: &str = concat!(
        "<dt class=\"accordion__heading\">",
        "<button class=\"accordion__trigger\">",
        "<div class=\"accordion__title\">First</div>",
        "</button>",
        "</dt>",
        "<dd class=\"accordion__panel\">",
        "<div class=\"accordion__title\">Second</div>",
        "<a href=\"/more\">more</a>",
        "</dd>",
    );

    #[rstest]
    #[case(".accordion__title", "First")]
    #[case("dd .accordion__title", "Second")]
    #[case("div.accordion__title", "First")]
    #[case("dt button div", "First")]
    fn finds_first_match_in_document_order(#[case] selector: &str, #[case] expected: &str) {
        let nodes = read_fragment(FRAGMENT);
        let selector = Selector::parse(selector).unwrap();
        let element = selector.find_first(&nodes).unwrap();
        assert_eq!(element.text_content(), expected);
    }

    #[test]
    fn tag_selector_reads_attributes() {
        let nodes = read_fragment(FRAGMENT);
        let selector = Selector::parse("a").unwrap();
        let element = selector.find_first(&nodes).unwrap();
        assert_eq!(element.get_attr("href"), Some("/more"));
    }

    #[test]
    fn no_match_returns_none() {
        let nodes = read_fragment(FRAGMENT);
        let selector = Selector::parse(".missing").unwrap();
        assert!(selector.find_first(&nodes).is_none());
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(".")]
    #[case("div.")]
    fn invalid_selectors_are_rejected(#[case] selector: &str) {
        assert!(Selector::parse(selector).is_err());
    }
}
