//! Attribute schemas and block type declarations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrType {
    String,
    Number,
    Boolean,
}

impl AttrType {
    /// Whether a JSON value conforms to this type.
    pub fn check(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Number, Value::Number(_))
                | (Self::Boolean, Value::Bool(_))
        )
    }

    /// Type name for error and warning messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Describe the shape of an arbitrary JSON value.
    pub fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Where an attribute's serialized value lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrSource {
    /// Stored in the JSON object of the opening frame marker.
    Meta,
    /// The text content of the first descendant matching the selector.
    ///
    /// Text-sourced attributes should declare a default (usually the empty
    /// string): absent values and empty text are indistinguishable in
    /// markup, and the default is what both deserialize to.
    Text { selector: String },
    /// A named markup attribute of the first descendant matching the
    /// selector. The value is absent when the element omits the attribute.
    Attribute { selector: String, attribute: String },
}

/// Declaration of a single block attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrSpec {
    pub name: String,
    pub kind: AttrType,
    /// Value resolved when no override is present. `None` means the
    /// attribute is simply absent until set.
    pub default: Option<Value>,
    pub source: AttrSource,
}

impl AttrSpec {
    /// A metadata-sourced string attribute with no default.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::String)
    }

    /// A metadata-sourced number attribute with no default.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::Number)
    }

    /// A metadata-sourced boolean attribute with no default.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, AttrType::Boolean)
    }

    fn new(name: impl Into<String>, kind: AttrType) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            source: AttrSource::Meta,
        }
    }

    /// Set the schema default.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Source the value from the text content of a selector target.
    pub fn from_text(mut self, selector: impl Into<String>) -> Self {
        self.source = AttrSource::Text {
            selector: selector.into(),
        };
        self
    }

    /// Source the value from a markup attribute of a selector target.
    pub fn from_attribute(
        mut self,
        selector: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        self.source = AttrSource::Attribute {
            selector: selector.into(),
            attribute: attribute.into(),
        };
        self
    }
}

/// Default children inserted when a container block is created empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
    /// A fixed list of child type ids.
    Fixed(Vec<String>),
    /// `count_attr` children of `child` type, driven by a number attribute
    /// of the block itself.
    Counted { child: String, count_attr: String },
}

/// A block type's full schema declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Namespaced type id, e.g. `"breezeblocks/container"`.
    pub type_id: String,
    /// Human-readable title shown by editor hosts.
    pub title: String,
    /// Attribute declarations, in declaration order.
    pub attributes: Vec<AttrSpec>,
    /// Allow-list of child type ids. `None` permits any child; an empty
    /// list marks a leaf block that takes no children. Enforced by the
    /// editing layer, exposed here for it.
    pub allowed_children: Option<Vec<String>>,
    /// Type ids this block may appear inside, when restricted.
    pub parent: Option<Vec<String>>,
    /// Default children inserted when the block is created empty.
    pub template: Option<Template>,
}

impl BlockSchema {
    pub fn new(type_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            title: title.into(),
            attributes: Vec::new(),
            allowed_children: None,
            parent: None,
            template: None,
        }
    }

    /// Append an attribute declaration.
    pub fn attr(mut self, spec: AttrSpec) -> Self {
        self.attributes.push(spec);
        self
    }

    /// Restrict which child types this block accepts.
    pub fn allow_children(mut self, type_ids: &[&str]) -> Self {
        self.allowed_children = Some(type_ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Mark the block as a leaf that takes no children.
    pub fn leaf(mut self) -> Self {
        self.allowed_children = Some(Vec::new());
        self
    }

    /// Restrict which parents this block may appear inside.
    pub fn with_parent(mut self, type_ids: &[&str]) -> Self {
        self.parent = Some(type_ids.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Set the default-children template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// Look up an attribute declaration by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// The schema default for an attribute, if declared.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.attribute(name).and_then(|a| a.default.as_ref())
    }

    /// Whether the allow-list (if any) permits the given child type.
    pub fn allows_child(&self, type_id: &str) -> bool {
        match &self.allowed_children {
            None => true,
            Some(allowed) => allowed.iter().any(|t| t == type_id),
        }
    }
}
