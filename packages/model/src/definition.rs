//! Palette component definitions.
//!
//! A definition is the read-only template the palette hands the core
//! when the user drags a new component in. The core never inspects
//! where it came from; it only needs this shape to synthesize an
//! [`Element`].

use crate::element::Element;
use serde::{Deserialize, Serialize};
use serde_json::Map;

/// External palette record describing a draggable component kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Component kind discriminator, copied to `Element::kind`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    /// Whether elements of this kind are containers.
    #[serde(default)]
    pub accepts_children: bool,

    /// Seed values for the new element's property bag.
    #[serde(default)]
    pub default_properties: Map<String, serde_json::Value>,
}

impl ComponentDefinition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: None,
            category: None,
            component_type: None,
            accepts_children: false,
            default_properties: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn container(mut self) -> Self {
        self.accepts_children = true;
        self
    }

    pub fn with_default(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.default_properties.insert(key.into(), value);
        self
    }

    /// Synthesize a new element from this definition.
    ///
    /// Default properties are copied in first so the mirrored `"id"`
    /// entry always wins; an empty `children` list is created only when
    /// the definition accepts children.
    pub fn instantiate(&self, id: impl Into<String>) -> Element {
        let mut element = Element::new(id.into(), self.kind.clone(), self.accepts_children);
        for (key, value) in &self.default_properties {
            if key != "id" {
                element.properties.insert(key.clone(), value.clone());
            }
        }
        element.label = self.label.clone();
        element.category = self.category.clone();
        element.component_type = self
            .component_type
            .clone()
            .or_else(|| self.category.clone());
        element
    }
}
