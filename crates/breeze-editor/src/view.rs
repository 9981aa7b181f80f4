//! Declarative edit-view descriptions.
//!
//! A block's editing UI is plain data: which toolbar controls it shows,
//! which inspector panels it opens, and what its editable body markup
//! looks like. Hosts map these onto their own widget set; nothing here
//! references a concrete toolkit.

use breeze_core::ResolvedAttrs;
use breeze_markup::Node;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// The full editing description of one block instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditView {
    /// Classes on the block's outer editor wrapper.
    pub classes: Vec<String>,
    /// Extra wrapper properties (wide/full alignment hints).
    pub wrapper: Option<WrapperProps>,
    /// Block toolbar controls.
    pub toolbar: Vec<ToolbarControl>,
    /// Inspector sidebar panels.
    pub inspector: Vec<InspectorPanel>,
    /// Editable body markup; nested blocks render at the children slot.
    pub body: Vec<Node>,
}

impl EditView {
    pub fn new(classes: Vec<String>) -> Self {
        Self {
            classes,
            wrapper: None,
            toolbar: Vec::new(),
            inspector: Vec::new(),
            body: Vec::new(),
        }
    }
}

/// Properties the host applies to the block's editor wrapper element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperProps {
    pub data_align: String,
}

/// Wrapper props for the wide/full alignments, matching how the original
/// blocks exposed `data-align` for exactly those two values.
pub fn align_wrapper(align: Option<&str>) -> Option<WrapperProps> {
    match align {
        Some(align @ ("wide" | "full")) => Some(WrapperProps {
            data_align: align.to_string(),
        }),
        _ => None,
    }
}

/// A block toolbar control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ToolbarControl {
    /// Alignment toolbar restricted to the given controls.
    Alignment {
        value: Option<String>,
        controls: Vec<String>,
    },
    /// Opens the media library for the block's image.
    MediaButton {
        label: String,
        media_id: Option<i64>,
    },
}

/// One inspector sidebar panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectorPanel {
    pub title: Option<String>,
    pub rows: Vec<InspectorControl>,
}

impl InspectorPanel {
    pub fn untitled(rows: Vec<InspectorControl>) -> Self {
        Self { title: None, rows }
    }

    pub fn titled(title: impl Into<String>, rows: Vec<InspectorControl>) -> Self {
        Self {
            title: Some(title.into()),
            rows,
        }
    }
}

/// A single inspector control bound to an attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InspectorControl {
    Toggle {
        label: String,
        checked: bool,
    },
    Range {
        label: String,
        value: i64,
        min: i64,
        max: i64,
    },
    Select {
        label: String,
        value: String,
        options: Vec<SelectOption>,
    },
    ColorPicker {
        label: String,
        value: String,
    },
    UrlInput {
        value: Option<String>,
    },
}

/// An option in a [`InspectorControl::Select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A block's contribution to the editing UI.
pub trait BlockUi: Send + Sync {
    /// The block type this UI belongs to.
    fn type_id(&self) -> &str;

    /// Describe the editing UI for the current attribute state.
    fn edit(&self, attrs: &ResolvedAttrs<'_>) -> EditView;

    /// Attribute updates to apply when an instance enters the tree
    /// (freshly inserted or loaded from markup). The default does nothing;
    /// blocks use this for one-time initialization such as assigning an
    /// anchor id.
    fn on_mount(&self, _attrs: &ResolvedAttrs<'_>) -> Vec<(String, Value)> {
        Vec::new()
    }
}

/// Registry of per-type edit UIs, parallel to the core block registry.
#[derive(Default)]
pub struct UiRegistry {
    uis: HashMap<String, Box<dyn BlockUi>>,
}

impl UiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block UI.
    ///
    /// # Errors
    /// Fails with `DuplicateType` when the type id already has a UI.
    pub fn register(&mut self, ui: Box<dyn BlockUi>) -> crate::Result<()> {
        let type_id = ui.type_id().to_string();
        if self.uis.contains_key(&type_id) {
            return Err(breeze_core::Error::DuplicateType { type_id }.into());
        }
        self.uis.insert(type_id, ui);
        Ok(())
    }

    /// Look up the UI for a block type. Blocks without a registered UI are
    /// legal; hosts render a fallback for them.
    pub fn lookup(&self, type_id: &str) -> Option<&dyn BlockUi> {
        self.uis.get(type_id).map(|ui| ui.as_ref())
    }

    pub fn len(&self) -> usize {
        self.uis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uis.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_wrapper_only_for_wide_and_full() {
        assert_eq!(align_wrapper(Some("wide")).unwrap().data_align, "wide");
        assert_eq!(align_wrapper(Some("full")).unwrap().data_align, "full");
        assert!(align_wrapper(Some("center")).is_none());
        assert!(align_wrapper(None).is_none());
    }
}
