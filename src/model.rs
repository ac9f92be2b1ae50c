//! Data model for parsed class documentation: renderer-agnostic.
//!
//! Field names double as the keys templates see, so renames here are
//! breaking for user templates.

use serde::Serialize;

/// Everything documented in a single script file.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ClassDocument {
    /// Script path relative to the project root.
    pub file_path: String,
    /// `class_name` declaration, if any
    pub name: Option<String>,
    /// Raw `extends` reference: a class name, a quoted script path, or empty.
    pub extends: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub signals: Vec<SignalDoc>,
    pub enums: Vec<EnumDoc>,
    pub properties: Vec<PropertyDoc>,
    pub methods: Vec<MethodDoc>,
}

impl ClassDocument {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

/// A `var` declaration.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PropertyDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: Option<String>,
    pub description: Option<String>,
    /// Normalized default: a literal token or one of the container
    /// placeholders in [`placeholder`]. Always `None` for `@onready`.
    pub default: Option<String>,
    pub has_getter: bool,
    pub has_setter: bool,
}

/// Placeholders substituted for container literals in property defaults.
pub mod placeholder {
    pub const EMPTY_MAP: &str = "{}";
    pub const MAP: &str = "{...}";
    pub const EMPTY_LIST: &str = "[]";
    pub const LIST: &str = "[...]";
}

/// A `func` declaration.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MethodDoc {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<ArgDoc>,
    pub return_type: Option<String>,
}

/// A `signal` declaration.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SignalDoc {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<ArgDoc>,
}

/// One parameter of a method or signal.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ArgDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: Option<String>,
    pub default: Option<String>,
}

/// An `enum` declaration.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct EnumDoc {
    pub name: String,
    pub description: Option<String>,
    /// Members in declaration order.
    pub values: Vec<EnumMember>,
}

impl EnumDoc {
    /// Insert a member, overwriting the description of an existing member
    /// with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, description: Option<String>) {
        let name = name.into();
        match self.values.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.description = description,
            None => self.values.push(EnumMember { name, description }),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub description: Option<String>,
}
