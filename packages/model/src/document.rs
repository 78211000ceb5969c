//! # Document
//!
//! Top-level persistence shape: the root element list plus the
//! metadata the host stores alongside it. The core owns no storage;
//! documents round-trip as plain JSON for whatever persistence layer
//! the host wires up.

use crate::element::Element;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which builder surface a document belongs to. Only affects how
/// statistics are labelled, never structural logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Form,
    Zone,
    Email,
}

impl EditorMode {
    /// Display noun for container-level counts in this mode.
    pub fn container_noun(&self) -> &'static str {
        match self {
            EditorMode::Form => "sections",
            EditorMode::Zone => "containers",
            EditorMode::Email => "blocks",
        }
    }

    /// Display noun for leaf-level counts in this mode.
    pub fn leaf_noun(&self) -> &'static str {
        match self {
            EditorMode::Form => "fields",
            EditorMode::Zone => "components",
            EditorMode::Email => "elements",
        }
    }
}

/// An editable builder document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub mode: EditorMode,

    /// Mode-specific settings (theme, submit behavior, send options).
    /// Opaque to the core.
    #[serde(default)]
    pub settings: Map<String, Value>,

    /// Root element list. The tree has no separate root node.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(title: impl Into<String>, mode: EditorMode) -> Self {
        Self {
            title: title.into(),
            description: None,
            mode,
            settings: Map::new(),
            elements: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
