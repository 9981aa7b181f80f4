//! Deserialization of persisted markup back into block instances.
//!
//! The inverse of [`crate::serialize`]. Loading is lenient by design:
//! persisted markup survives hand edits, so recoverable problems fall back
//! to schema defaults (or skip the offending region) and are reported as
//! [`ParseWarning`]s rather than failing the whole document.

use crate::error::{Error, Result};
use crate::instance::BlockInstance;
use crate::registry::BlockRegistry;
use crate::schema::{AttrSource, AttrType, BlockSchema};
use crate::warnings::ParseWarning;
use breeze_markup::{frame, read_fragment, FrameIssue, Node, Region, Selector};
use serde_json::{Map, Value};

/// Result of deserializing a single block fragment.
#[derive(Debug)]
pub struct Deserialized {
    pub block: BlockInstance,
    pub warnings: Vec<ParseWarning>,
}

/// Result of parsing a whole document.
#[derive(Debug, Default)]
pub struct ParsedDocument {
    pub blocks: Vec<BlockInstance>,
    pub warnings: Vec<ParseWarning>,
}

/// Deserialize a fragment holding exactly one block region.
///
/// # Errors
/// Fails with `SchemaMismatch` when the fragment does not contain exactly
/// one complete region, or when the region's recorded type id has no
/// registered schema. Problems below the root block are warnings, not
/// errors.
pub fn deserialize(fragment: &str, registry: &BlockRegistry) -> Result<Deserialized> {
    let (regions, issues) = frame::scan_regions(fragment);
    let mut warnings = Vec::new();
    for issue in issues {
        push_frame_issue(&mut warnings, issue);
    }

    let region = match regions.as_slice() {
        [region] => region,
        [] => return Err(Error::schema_mismatch("fragment", "no complete block region")),
        _ => {
            return Err(Error::schema_mismatch(
                "fragment",
                "expected a single block region",
            ))
        }
    };

    let block = region_to_instance(region, registry, &mut warnings)?;
    Ok(Deserialized { block, warnings })
}

/// Parse a document containing any number of top-level block regions.
///
/// Never fails: regions that cannot be loaded are skipped with a warning,
/// so one broken or stale region cannot abort loading the document around
/// it.
pub fn parse_document(source: &str, registry: &BlockRegistry) -> ParsedDocument {
    let (regions, issues) = frame::scan_regions(source);
    let mut document = ParsedDocument::default();
    for issue in issues {
        push_frame_issue(&mut document.warnings, issue);
    }

    for region in &regions {
        match region_to_instance(region, registry, &mut document.warnings) {
            Ok(block) => document.blocks.push(block),
            Err(_) => push_warning(
                &mut document.warnings,
                ParseWarning::UnknownType {
                    type_id: region.type_id.clone(),
                },
            ),
        }
    }
    document
}

fn region_to_instance(
    region: &Region,
    registry: &BlockRegistry,
    warnings: &mut Vec<ParseWarning>,
) -> Result<BlockInstance> {
    let block_type = registry.lookup(&region.type_id).map_err(|_| {
        Error::schema_mismatch(&region.type_id, "no registered schema for this type id")
    })?;
    let schema = block_type.schema();

    let meta = match region.parse_meta() {
        Ok(meta) => meta,
        Err(e) => {
            push_warning(
                warnings,
                ParseWarning::InvalidMeta {
                    type_id: region.type_id.clone(),
                    message: e.to_string(),
                },
            );
            None
        }
    };

    // Split nested child regions out of the inner markup; what remains is
    // the static markup that selector rules run against.
    let (child_regions, child_issues) = frame::scan_regions(&region.inner);
    for issue in child_issues {
        push_frame_issue(warnings, issue);
    }
    let static_nodes = read_fragment(&static_markup(&region.inner, &child_regions));

    let mut block = BlockInstance::new(schema);
    apply_meta_attrs(&mut block, schema, meta.as_ref(), warnings);
    apply_markup_attrs(&mut block, schema, &static_nodes, warnings);

    for child_region in &child_regions {
        match region_to_instance(child_region, registry, warnings) {
            Ok(child) => {
                if !schema.allows_child(child.type_id()) {
                    push_warning(
                        warnings,
                        ParseWarning::DisallowedChild {
                            parent: schema.type_id.clone(),
                            child: child.type_id().to_string(),
                        },
                    );
                }
                block.push_child(child);
            }
            Err(_) => push_warning(
                warnings,
                ParseWarning::UnknownType {
                    type_id: child_region.type_id.clone(),
                },
            ),
        }
    }

    Ok(block)
}

fn apply_meta_attrs(
    block: &mut BlockInstance,
    schema: &BlockSchema,
    meta: Option<&Map<String, Value>>,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(meta) = meta else {
        return;
    };

    for (name, value) in meta {
        let spec = schema
            .attribute(name)
            .filter(|spec| spec.source == AttrSource::Meta);
        let Some(spec) = spec else {
            push_warning(
                warnings,
                ParseWarning::UnknownAttribute {
                    type_id: schema.type_id.clone(),
                    name: name.clone(),
                },
            );
            continue;
        };

        if spec.kind.check(value) {
            block
                .set_attributes(schema, [(name.as_str(), value.clone())])
                .expect("type-checked metadata value must apply");
        } else {
            push_warning(
                warnings,
                ParseWarning::TypeMismatch {
                    type_id: schema.type_id.clone(),
                    name: name.clone(),
                    expected: spec.kind.name(),
                    found: AttrType::describe(value).to_string(),
                },
            );
        }
    }
}

fn apply_markup_attrs(
    block: &mut BlockInstance,
    schema: &BlockSchema,
    nodes: &[Node],
    warnings: &mut Vec<ParseWarning>,
) {
    for spec in &schema.attributes {
        let (selector, attribute) = match &spec.source {
            AttrSource::Meta => continue,
            AttrSource::Text { selector } => (selector, None),
            AttrSource::Attribute {
                selector,
                attribute,
            } => (selector, Some(attribute)),
        };

        // Selectors were validated at registration.
        let Ok(parsed) = Selector::parse(selector) else {
            continue;
        };
        let Some(element) = parsed.find_first(nodes) else {
            push_warning(
                warnings,
                ParseWarning::MissingMarkupSource {
                    type_id: schema.type_id.clone(),
                    name: spec.name.clone(),
                    selector: selector.clone(),
                },
            );
            continue;
        };

        let value = match attribute {
            // A present element without the named attribute encodes an
            // unset value, not a hand-edit; no warning.
            Some(attribute) => element.get_attr(attribute).map(str::to_string),
            // Empty text is indistinguishable from an unset value.
            None => Some(element.text_content()).filter(|t| !t.is_empty()),
        };

        if let Some(value) = value {
            if spec.kind == AttrType::String {
                block
                    .set_attributes(schema, [(spec.name.as_str(), Value::String(value))])
                    .expect("string value must apply to a string attribute");
            } else {
                push_warning(
                    warnings,
                    ParseWarning::TypeMismatch {
                        type_id: schema.type_id.clone(),
                        name: spec.name.clone(),
                        expected: spec.kind.name(),
                        found: "string".to_string(),
                    },
                );
            }
        }
    }
}

/// The inner markup with all child-region frames cut out.
fn static_markup(inner: &str, child_regions: &[Region]) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut last = 0;
    for region in child_regions {
        out.push_str(&inner[last..region.span.start]);
        last = region.span.end;
    }
    out.push_str(&inner[last..]);
    out
}

fn push_frame_issue(warnings: &mut Vec<ParseWarning>, issue: FrameIssue) {
    let warning = match issue {
        FrameIssue::StrayClose { type_id } => ParseWarning::MalformedFrame {
            type_id,
            message: "closing marker without a matching open".to_string(),
        },
        FrameIssue::Unterminated { type_id } => ParseWarning::MalformedFrame {
            type_id,
            message: "region is never closed".to_string(),
        },
    };
    push_warning(warnings, warning);
}

fn push_warning(warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
    tracing::warn!(warning = %warning, "lenient deserialize fallback");
    warnings.push(warning);
}
