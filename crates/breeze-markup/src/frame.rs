//! Comment-frame scanning and formatting for serialized block regions.
//!
//! One serialized block occupies a region delimited by comment markers:
//!
//! ```text
//! <!-- blk:breezeblocks/container {"align":"wide"} -->
//! <div class="...">...</div>
//! <!-- /blk:breezeblocks/container -->
//! ```
//!
//! The opening marker carries the block's type id and, when any explicit
//! attribute differs from its schema default, a JSON object with those
//! values. Regions nest: a container's inner markup holds the full frames
//! of its children. [`scan_regions`] returns top-level regions only; the
//! nested frames stay inside [`Region::inner`] for recursive handling.

use crate::error::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::ops::Range;
use std::sync::LazyLock;

/// Pattern matching opening and closing frame markers.
///
/// Group 1 is present on closing markers, group 2 is the type id, group 3
/// the raw metadata text (opening markers only). The metadata cannot
/// contain `-->` because [`encode_meta`] escapes `-` runs, so a non-greedy
/// match up to the comment terminator is safe.
static MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*(/)?blk:([a-zA-Z0-9_-]+(?:/[a-zA-Z0-9_-]+)?)\s*(.*?)-->")
        .expect("invalid frame marker regex")
});

/// A top-level serialized block region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The block type id recorded in the opening marker.
    pub type_id: String,
    /// Raw metadata text from the opening marker, if any.
    pub meta_raw: Option<String>,
    /// Markup between the markers, excluding the markers themselves.
    /// Contains the full frames of any nested child regions.
    pub inner: String,
    /// Byte range of the whole region in the scanned source.
    pub span: Range<usize>,
}

impl Region {
    /// Parse the metadata text as a JSON object.
    pub fn parse_meta(&self) -> Result<Option<Map<String, Value>>> {
        let Some(raw) = &self.meta_raw else {
            return Ok(None);
        };
        serde_json::from_str::<Map<String, Value>>(raw)
            .map(Some)
            .map_err(|source| Error::InvalidMeta {
                type_id: self.type_id.clone(),
                source,
            })
    }
}

/// A recoverable problem found while scanning frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameIssue {
    /// A closing marker with no matching open region.
    StrayClose { type_id: String },
    /// An opening marker whose region never closes before end of input.
    Unterminated { type_id: String },
}

/// Scan a source string for top-level block regions.
///
/// Never fails: malformed framing is reported through the returned issue
/// list and skipped, so one broken region cannot prevent the rest of a
/// document from loading.
pub fn scan_regions(source: &str) -> (Vec<Region>, Vec<FrameIssue>) {
    let mut regions = Vec::new();
    let mut issues = Vec::new();

    // Stack of open type ids; the bottom entry is the pending top-level
    // region currently being collected.
    let mut stack: Vec<String> = Vec::new();
    let mut pending: Option<(String, Option<String>, usize, usize)> = None;

    for caps in MARKER_PATTERN.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let is_close = caps.get(1).is_some();
        let type_id = caps.get(2).unwrap().as_str();
        let meta_text = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");

        if is_close {
            match stack.last() {
                Some(open) if open == type_id => {
                    stack.pop();
                    if stack.is_empty() {
                        let (type_id, meta_raw, region_start, content_start) =
                            pending.take().expect("open region must be pending");
                        let inner = &source[content_start..whole.start()];
                        let inner = inner.strip_prefix('\n').unwrap_or(inner);
                        let inner = inner.strip_suffix('\n').unwrap_or(inner);
                        regions.push(Region {
                            type_id,
                            meta_raw,
                            inner: inner.to_string(),
                            span: region_start..whole.end(),
                        });
                    }
                }
                _ => issues.push(FrameIssue::StrayClose {
                    type_id: type_id.to_string(),
                }),
            }
        } else {
            if stack.is_empty() {
                let meta_raw = (!meta_text.is_empty()).then(|| meta_text.to_string());
                pending = Some((type_id.to_string(), meta_raw, whole.start(), whole.end()));
            }
            stack.push(type_id.to_string());
        }
    }

    if let Some((type_id, ..)) = pending {
        issues.push(FrameIssue::Unterminated { type_id });
    }

    (regions, issues)
}

/// Assemble one serialized block region from its parts.
pub fn compose(type_id: &str, meta_json: Option<&str>, body: &str) -> String {
    match meta_json {
        Some(meta) => format!("<!-- blk:{type_id} {meta} -->\n{body}\n<!-- /blk:{type_id} -->"),
        None => format!("<!-- blk:{type_id} -->\n{body}\n<!-- /blk:{type_id} -->"),
    }
}

/// Encode a metadata object as single-line JSON safe to embed in a comment.
///
/// `-`, `<`, `>` and `&` are written as unicode escapes so the emitted text
/// can never contain a comment terminator or confuse the markup reader.
pub fn encode_meta(meta: &Map<String, Value>) -> String {
    let json = serde_json::to_string(&Value::Object(meta.clone()))
        .expect("JSON object serialization cannot fail");
    json.replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
