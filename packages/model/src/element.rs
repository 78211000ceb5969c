//! # Element Tree
//!
//! The ordered, nested node structure shared by the form, zone and
//! email builders. A tree is a plain `Vec<Element>` of roots; there is
//! no separate root node.
//!
//! Structural invariants (hold before and after every mutation):
//! - every `id` is unique across the whole tree
//! - `properties["id"]` mirrors the element's `id`
//! - a leaf (`children: None`) never acquires children implicitly
//! - child order is significant

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The `type` string of synthetic column containers.
pub const COLUMN_KIND: &str = "column";

/// The `properties` key identifying a column's slot among its siblings.
pub const COLUMN_INDEX_KEY: &str = "columnIndex";

/// A node in the builder's content tree.
///
/// `children: Some(_)` (even empty) marks a container; `None` marks a
/// leaf. Only elements whose originating definition accepts children
/// are ever constructed as containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,

    /// Component kind discriminator ("text", "section", "hero", ...).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Open component configuration bag. Always carries an `"id"`
    /// entry mirroring `self.id`.
    #[serde(default)]
    pub properties: Map<String, Value>,

    /// Ordered children. Presence (even empty) marks a container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Element>>,

    /// Provenance tag from the palette definition, used for grouping
    /// and statistics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
}

impl Element {
    /// Bare element of the given kind. Leaf unless `container`.
    pub fn new(id: impl Into<String>, kind: impl Into<String>, container: bool) -> Self {
        let mut element = Self {
            id: String::new(),
            kind: kind.into(),
            label: None,
            name: None,
            display_name: None,
            properties: Map::new(),
            children: if container { Some(Vec::new()) } else { None },
            category: None,
            component_type: None,
        };
        element.assign_id(id.into());
        element
    }

    /// Synthetic column container holding the children assigned to one
    /// column slot of a multi-column parent.
    pub fn column(id: impl Into<String>, column_index: usize) -> Self {
        let mut column = Self::new(id, COLUMN_KIND, true);
        column
            .properties
            .insert(COLUMN_INDEX_KEY.to_string(), Value::from(column_index as u64));
        column
    }

    /// Set `id` and keep `properties["id"]` mirrored.
    pub fn assign_id(&mut self, id: String) {
        self.properties
            .insert("id".to_string(), Value::String(id.clone()));
        self.id = id;
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_column(&self) -> bool {
        self.kind == COLUMN_KIND
    }

    /// The column slot this element occupies, if it is a column.
    pub fn column_index(&self) -> Option<usize> {
        self.properties
            .get(COLUMN_INDEX_KEY)
            .and_then(Value::as_u64)
            .map(|n| n as usize)
    }

    /// Nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(Element::node_count)
            .sum::<usize>()
    }
}

/// Pre-order search across a tree for the element with `id`.
pub fn find_element<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let Some(children) = &element.children {
            if let Some(found) = find_element(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Pre-order search, mutable.
pub fn find_element_mut<'a>(elements: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
    for element in elements {
        if element.id == id {
            return Some(element);
        }
        if let Some(children) = &mut element.children {
            if let Some(found) = find_element_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Remove the element with `id` from wherever it occurs and return it,
/// subtree included. `None` if absent.
pub fn remove_element(elements: &mut Vec<Element>, id: &str) -> Option<Element> {
    if let Some(pos) = elements.iter().position(|e| e.id == id) {
        return Some(elements.remove(pos));
    }
    for element in elements {
        if let Some(children) = &mut element.children {
            if let Some(removed) = remove_element(children, id) {
                return Some(removed);
            }
        }
    }
    None
}

/// Total node count across the whole tree.
pub fn tree_node_count(elements: &[Element]) -> usize {
    elements.iter().map(Element::node_count).sum()
}

/// Collect every id in the tree, pre-order.
pub fn collect_ids(elements: &[Element], out: &mut Vec<String>) {
    for element in elements {
        out.push(element.id.clone());
        if let Some(children) = &element.children {
            collect_ids(children, out);
        }
    }
}

/// True when every id in the tree is distinct.
pub fn ids_are_unique(elements: &[Element]) -> bool {
    let mut ids = Vec::new();
    collect_ids(elements, &mut ids);
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().all(|id| seen.insert(id.as_str()))
}
