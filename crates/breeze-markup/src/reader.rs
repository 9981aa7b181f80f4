//! Lenient element reader for persisted static markup.
//!
//! Parses the markup between a block's frame markers into a [`Node`] tree so
//! sourced attributes can be extracted with selectors. Persisted content may
//! have been hand-edited, so the reader never fails: unknown constructs are
//! kept as text, stray closing tags are ignored, and unclosed elements are
//! closed implicitly at the end of input.

use crate::node::{Element, Node};

/// Tags that never contain children and may omit a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Read a markup fragment into a list of root nodes.
pub fn read_fragment(source: &str) -> Vec<Node> {
    Reader {
        src: source,
        pos: 0,
    }
    .read_all()
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_all(mut self) -> Vec<Node> {
        let mut roots = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        while self.pos < self.src.len() {
            match self.next_token() {
                Token::Text(text) => {
                    let decoded = html_escape::decode_html_entities(&text).into_owned();
                    push_node(&mut roots, &mut stack, Node::Text(decoded));
                }
                Token::Open { element, closed } => {
                    if closed || VOID_TAGS.contains(&element.tag.as_str()) {
                        push_node(&mut roots, &mut stack, Node::Element(element));
                    } else {
                        stack.push(element);
                    }
                }
                Token::Close(tag) => {
                    // Ignore a closing tag with no matching open element.
                    if let Some(depth) = stack.iter().rposition(|e| e.tag == tag) {
                        while stack.len() > depth {
                            let element = stack.pop().unwrap();
                            push_node(&mut roots, &mut stack, Node::Element(element));
                        }
                    }
                }
                Token::Comment => {}
            }
        }

        // Close anything left open at end of input.
        while let Some(element) = stack.pop() {
            push_node(&mut roots, &mut stack, Node::Element(element));
        }

        roots
    }

    fn next_token(&mut self) -> Token {
        let rest = &self.src[self.pos..];

        if !rest.starts_with('<') {
            let end = rest.find('<').unwrap_or(rest.len());
            self.pos += end;
            return Token::Text(rest[..end].to_string());
        }

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(end) => self.pos += end + 3,
                None => self.pos = self.src.len(),
            }
            return Token::Comment;
        }

        if let Some(after) = rest.strip_prefix("</") {
            let name_len = tag_name_len(after);
            if name_len > 0 {
                let tag = after[..name_len].to_ascii_lowercase();
                let close = after[name_len..].find('>').map(|i| name_len + i + 1);
                self.pos += 2 + close.unwrap_or(after.len());
                return Token::Close(tag);
            }
        } else {
            let after = &rest[1..];
            let name_len = tag_name_len(after);
            if name_len > 0 {
                let mut element = Element::new(after[..name_len].to_ascii_lowercase());
                let (consumed, closed) = read_attrs(&after[name_len..], &mut element);
                self.pos += 1 + name_len + consumed;
                return Token::Open { element, closed };
            }
        }

        // A bare `<` that opens nothing. Keep it as text.
        self.pos += 1;
        Token::Text("<".to_string())
    }
}

/// Parse attributes up to and including the closing `>`. Returns the
/// number of bytes consumed and whether the tag was self-closing.
fn read_attrs(input: &str, element: &mut Element) -> (usize, bool) {
    let bytes = input.as_bytes();
    let mut i = 0;

    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            return (i, false);
        }
        if bytes[i] == b'>' {
            return (i + 1, false);
        }
        if bytes[i] == b'/' {
            i += 1;
            if i < bytes.len() && bytes[i] == b'>' {
                return (i + 1, true);
            }
            continue;
        }

        let name_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && !b"=/>".contains(&bytes[i]) {
            i += 1;
        }
        let name = input[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = String::new();
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                value = input[value_start..i].to_string();
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                value = input[value_start..i].to_string();
            }
        }

        if !name.is_empty() {
            let decoded = html_escape::decode_html_entities(&value).into_owned();
            element.attrs.push((name, decoded));
        }
    }
}

fn tag_name_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return 0;
    }
    bytes
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'-'))
        .unwrap_or(bytes.len())
}

fn push_node(roots: &mut Vec<Node>, stack: &mut [Element], node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

enum Token {
    Text(String),
    Open { element: Element, closed: bool },
    Close(String),
    Comment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn only_element(nodes: &[Node]) -> &Element {
        let elements: Vec<_> = nodes.iter().filter_map(|n| n.as_element()).collect();
        assert_eq!(elements.len(), 1);
        elements[0]
    }

    #[test]
    fn reads_nested_elements() {
        let nodes = read_fragment(r#"<div class="outer"><a href="/x">go</a></div>"#);
        let div = only_element(&nodes);
        assert_eq!(div.tag, "div");
        assert_eq!(div.get_attr("class"), Some("outer"));
        let a = div.children[0].as_element().unwrap();
        assert_eq!(a.get_attr("href"), Some("/x"));
        assert_eq!(a.text_content(), "go");
    }

    #[test]
    fn decodes_entities_in_text_and_attributes() {
        let nodes = read_fragment(r#"<div data-x="a &amp; b">1 &lt; 2</div>"#);
        let div = only_element(&nodes);
        assert_eq!(div.get_attr("data-x"), Some("a & b"));
        assert_eq!(div.text_content(), "1 < 2");
    }

    #[test]
    fn render_then_read_round_trips_structure() {
        let node = Element::new("div")
            .attr("class", "tile")
            .attr("data-note", "x < \"y\"")
            .child(Element::new("a").attr("href", "https://example.test").text("label").into_node())
            .into_node();
        let nodes = read_fragment(&node.render());
        let div = only_element(&nodes);
        assert_eq!(div.get_attr("data-note"), Some("x < \"y\""));
        let a = div.children[0].as_element().unwrap();
        assert_eq!(a.get_attr("href"), Some("https://example.test"));
        assert_eq!(a.text_content(), "label");
    }

    #[test]
    fn tolerates_stray_close_and_unclosed_tags() {
        let nodes = read_fragment("</dd><dl><dt>term");
        let dl = nodes
            .iter()
            .filter_map(|n| n.as_element())
            .find(|e| e.tag == "dl")
            .unwrap();
        assert_eq!(dl.children[0].as_element().unwrap().tag, "dt");
        assert_eq!(dl.text_content(), "term");
    }

    #[test]
    fn skips_comments_and_keeps_text() {
        let nodes = read_fragment("before<!-- note -->after");
        let text: String = nodes
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(text, "beforeafter");
    }

    #[test]
    fn void_and_self_closing_tags_take_no_children() {
        let nodes = read_fragment(r#"<div><br><span/>tail</div>"#);
        let div = only_element(&nodes);
        assert_eq!(div.children.len(), 3);
        assert_eq!(div.text_content(), "tail");
    }
}
