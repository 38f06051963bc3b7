//! Declarative tool descriptors.
//!
//! A descriptor is the schema shown to the model: name, description, and
//! an ordered parameter → type-tag list. Tool authors state the schema at
//! registration; nothing is introspected.

use serde_json::{json, Value};
use std::fmt;

/// Metadata describing a tool's call surface.
///
/// Immutable once built. Serializes to
/// `{"name": …, "description": …|null, "parameters": {"properties": …}}`
/// with parameters in declared order.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    name: String,
    description: Option<String>,
    params: Vec<Param>,
}

#[derive(Debug, Clone)]
struct Param {
    name: String,
    type_tag: String,
}

impl ToolDescriptor {
    /// Start a descriptor for the named tool.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: Vec::new(),
        }
    }

    /// Attach a human-readable description (shown to the model).
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare the next parameter with its type tag.
    ///
    /// Recognized tags are `int`, `str`, `bool`, `float` and the
    /// JSON-schema synonyms `integer`, `string`, `boolean`, `number`.
    /// Unrecognized tags are carried verbatim and skipped by coercion.
    pub fn param(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            type_tag: type_tag.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type tag for a parameter, if it exists.
    pub fn type_tag(&self, param: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == param)
            .map(|p| p.type_tag.as_str())
    }

    /// Declared parameter names, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    /// The canonical JSON object form embedded into prompts.
    pub fn to_value(&self) -> Value {
        let mut properties = serde_json::Map::new();
        for p in &self.params {
            properties.insert(p.name.clone(), json!({ "type": p.type_tag }));
        }
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": { "properties": properties },
        })
    }
}

impl fmt::Display for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
