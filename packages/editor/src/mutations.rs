//! # Tree Mutations
//!
//! The structural operations that transform one element tree into the
//! next: insert-from-palette, root reorder, update, delete, duplicate.
//!
//! ## Semantics
//!
//! - Every operation is total. A miss (unknown id, stale container,
//!   non-container target) degrades to a no-op reported as
//!   [`MutationOutcome::Ignored`]; nothing at this layer errors on
//!   live-gesture input.
//! - Root splice indices are clamped, never rejected.
//! - Delete cascades to the whole subtree.
//! - Duplicate deep-clones with fresh ids on every node and marks only
//!   the top-level clone as a copy.

use crate::drop_target::DropTarget;
use crate::errors::EditorError;
use mosaic_model::{
    find_element, find_element_mut, generate_id, remove_element, ComponentDefinition, Element,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Structural operations on the element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Synthesize a new element from a palette definition and place it
    /// at the resolved drop target.
    InsertFromPalette {
        definition: ComponentDefinition,
        target: DropTarget,
    },

    /// Move `active_id` to the position of `over_id` among root
    /// elements. Nested reordering is issued by the renderer as
    /// root-level moves.
    Reorder { active_id: String, over_id: String },

    /// Shallow-merge a patch into the named element.
    Update {
        element_id: String,
        patch: ElementPatch,
    },

    /// Remove the named element and its whole subtree.
    Delete { element_id: String },

    /// Clone the named element's subtree with fresh ids, inserted
    /// right after the original.
    Duplicate { element_id: String },
}

/// Partial update for a single element. `None` fields are left alone;
/// `properties` entries are merged key-by-key into the existing bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub properties: Option<Map<String, Value>>,
}

impl ElementPatch {
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.name.is_none()
            && self.display_name.is_none()
            && self.properties.is_none()
    }

    fn apply_to(&self, element: &mut Element) {
        if let Some(label) = &self.label {
            element.label = Some(label.clone());
        }
        if let Some(name) = &self.name {
            element.name = Some(name.clone());
        }
        if let Some(display_name) = &self.display_name {
            element.display_name = Some(display_name.clone());
        }
        if let Some(properties) = &self.properties {
            for (key, value) in properties {
                element.properties.insert(key.clone(), value.clone());
            }
            // A patch can never detach the id mirror
            element.assign_id(element.id.clone());
        }
    }
}

/// What an applied mutation did to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The tree changed; `element_id` is the inserted, cloned, moved,
    /// patched or deleted element.
    Applied { element_id: String },
    /// Fail-open no-op: the tree is unchanged.
    Ignored,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    pub fn element_id(&self) -> Option<&str> {
        match self {
            MutationOutcome::Applied { element_id } => Some(element_id),
            MutationOutcome::Ignored => None,
        }
    }
}

impl Mutation {
    /// Apply this mutation to the root list in place.
    pub fn apply(&self, elements: &mut Vec<Element>) -> MutationOutcome {
        match self {
            Mutation::InsertFromPalette { definition, target } => {
                apply_insert(elements, definition, target)
            }
            Mutation::Reorder { active_id, over_id } => apply_reorder(elements, active_id, over_id),
            Mutation::Update { element_id, patch } => apply_update(elements, element_id, patch),
            Mutation::Delete { element_id } => apply_delete(elements, element_id),
            Mutation::Duplicate { element_id } => apply_duplicate(elements, element_id),
        }
    }

    /// Advisory precondition check for hosts that want strictness the
    /// fail-open `apply` deliberately does not enforce.
    pub fn validate(&self, elements: &[Element]) -> Result<(), EditorError> {
        if let Mutation::InsertFromPalette {
            target: DropTarget::ContainerAppend { container_id },
            ..
        } = self
        {
            if let Some(container) = find_element(elements, container_id) {
                if !container.is_container() {
                    return Err(EditorError::NotAContainer(container_id.clone()));
                }
            }
        }
        Ok(())
    }
}

fn apply_insert(
    elements: &mut Vec<Element>,
    definition: &ComponentDefinition,
    target: &DropTarget,
) -> MutationOutcome {
    let element = definition.instantiate(generate_id());
    let element_id = element.id.clone();

    match target {
        DropTarget::RootAppend => elements.push(element),

        DropTarget::RootInsertAt { index } => {
            let index = (*index).min(elements.len());
            elements.insert(index, element);
        }

        DropTarget::ContainerAppend { container_id } => {
            let Some(container) = find_element_mut(elements, container_id) else {
                warn!(%container_id, "insert target vanished, dropping gesture");
                return MutationOutcome::Ignored;
            };
            let Some(children) = &mut container.children else {
                warn!(%container_id, "insert target is not a container");
                return MutationOutcome::Ignored;
            };
            children.push(element);
        }

        DropTarget::ContainerColumnAppend {
            container_id,
            column_index,
        } => {
            let Some(container) = find_element_mut(elements, container_id) else {
                warn!(%container_id, "column insert target vanished");
                return MutationOutcome::Ignored;
            };
            let Some(children) = &mut container.children else {
                warn!(%container_id, "column insert target is not a container");
                return MutationOutcome::Ignored;
            };
            match children
                .iter_mut()
                .find(|child| child.is_column() && child.column_index() == Some(*column_index))
            {
                Some(column) => match &mut column.children {
                    Some(slot) => slot.push(element),
                    // Columns are always constructed as containers
                    None => return MutationOutcome::Ignored,
                },
                None => {
                    let mut column = Element::column(generate_id(), *column_index);
                    if let Some(slot) = &mut column.children {
                        slot.push(element);
                    }
                    children.push(column);
                }
            }
        }
    }

    MutationOutcome::Applied { element_id }
}

/// Root-level sibling move: remove the active element and re-insert it
/// at the over element's original position.
fn apply_reorder(elements: &mut Vec<Element>, active_id: &str, over_id: &str) -> MutationOutcome {
    let Some(from) = elements.iter().position(|e| e.id == active_id) else {
        return MutationOutcome::Ignored;
    };
    let Some(to) = elements.iter().position(|e| e.id == over_id) else {
        return MutationOutcome::Ignored;
    };
    if from == to {
        return MutationOutcome::Ignored;
    }

    let element = elements.remove(from);
    elements.insert(to.min(elements.len()), element);
    MutationOutcome::Applied {
        element_id: active_id.to_string(),
    }
}

fn apply_update(
    elements: &mut [Element],
    element_id: &str,
    patch: &ElementPatch,
) -> MutationOutcome {
    let Some(element) = find_element_mut(elements, element_id) else {
        return MutationOutcome::Ignored;
    };
    patch.apply_to(element);
    MutationOutcome::Applied {
        element_id: element_id.to_string(),
    }
}

fn apply_delete(elements: &mut Vec<Element>, element_id: &str) -> MutationOutcome {
    match remove_element(elements, element_id) {
        Some(_) => MutationOutcome::Applied {
            element_id: element_id.to_string(),
        },
        None => MutationOutcome::Ignored,
    }
}

fn apply_duplicate(elements: &mut Vec<Element>, element_id: &str) -> MutationOutcome {
    match duplicate_in(elements, element_id) {
        Some(clone_id) => MutationOutcome::Applied {
            element_id: clone_id,
        },
        None => MutationOutcome::Ignored,
    }
}

/// Find the list holding `element_id`, clone the element with fresh ids
/// and splice the clone in right after the original.
fn duplicate_in(list: &mut Vec<Element>, element_id: &str) -> Option<String> {
    if let Some(pos) = list.iter().position(|e| e.id == element_id) {
        let mut clone = clone_with_fresh_ids(&list[pos]);
        mark_as_copy(&mut clone);
        let clone_id = clone.id.clone();
        list.insert(pos + 1, clone);
        return Some(clone_id);
    }
    for element in list {
        if let Some(children) = &mut element.children {
            if let Some(clone_id) = duplicate_in(children, element_id) {
                return Some(clone_id);
            }
        }
    }
    None
}

fn clone_with_fresh_ids(element: &Element) -> Element {
    let mut clone = element.clone();
    clone.assign_id(generate_id());
    if let Some(children) = &mut clone.children {
        *children = children.iter().map(clone_with_fresh_ids).collect();
    }
    clone
}

/// Copy suffix goes on the top-level clone only; descendants keep
/// their labels.
fn mark_as_copy(clone: &mut Element) {
    for slot in [&mut clone.label, &mut clone.name, &mut clone.display_name] {
        if let Some(text) = slot {
            text.push_str(" (Copy)");
        }
    }
}
