//! # Editor Store
//!
//! Explicit mutable store backing one editing session: the current
//! document, the single-element selection and the derived statistics,
//! behind a command-style `apply` API so the core stays independent of
//! any UI framework's reactivity system.
//!
//! The store is single-threaded and synchronous; each UI event maps to
//! exactly one `apply` call which runs to completion. Readers treat
//! the tree as an immutable snapshot replaced wholesale on change.

use crate::drop_target::DropTarget;
use crate::errors::EditorError;
use crate::mutations::{Mutation, MutationOutcome};
use crate::stats::TreeStats;
use mosaic_model::{collect_ids, find_element, ComponentDefinition, Document, EditorMode, Element};
use std::collections::HashSet;
use tracing::debug;

/// One editing session over a document.
#[derive(Debug)]
pub struct EditorStore {
    document: Document,

    /// Id of the element the properties panel is focused on.
    /// Ephemeral, never persisted.
    selection: Option<String>,

    stats: TreeStats,

    /// Increments on every applied mutation; no-ops leave it alone.
    version: u64,

    dirty: bool,
}

impl EditorStore {
    pub fn new(title: impl Into<String>, mode: EditorMode) -> Self {
        Self::from_document(Document::new(title, mode))
    }

    pub fn from_document(document: Document) -> Self {
        let stats = TreeStats::compute(&document.elements);
        Self {
            document,
            selection: None,
            stats,
            version: 0,
            dirty: false,
        }
    }

    /// Load a persisted document.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(Self::from_document(Document::from_json(json)?))
    }

    /// Serialize the document for the host persistence layer.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(self.document.to_json()?)
    }

    /// Apply one mutation, then refresh selection and statistics.
    ///
    /// Fail-open: a miss returns [`MutationOutcome::Ignored`] with the
    /// tree, version and selection untouched.
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let selects_result = matches!(
            mutation,
            Mutation::InsertFromPalette { .. } | Mutation::Duplicate { .. }
        );

        let outcome = mutation.apply(&mut self.document.elements);

        if let MutationOutcome::Applied { element_id } = &outcome {
            debug!(%element_id, version = self.version + 1, "mutation applied");
            self.version += 1;
            self.dirty = true;

            if selects_result {
                self.selection = Some(element_id.clone());
            }
            self.refresh_selection();
            self.stats = TreeStats::compute(&self.document.elements);

            debug_assert!(self.validate().is_ok());
        }

        outcome
    }

    /// Resolve a raw drop-zone identifier against the current tree.
    pub fn resolve_drop(&self, zone_id: &str) -> DropTarget {
        DropTarget::resolve(zone_id, &self.document.elements)
    }

    /// Convenience: resolve and insert in one step, the way a drag-end
    /// gesture arrives from the UI.
    pub fn insert_at_zone(
        &mut self,
        definition: ComponentDefinition,
        zone_id: &str,
    ) -> MutationOutcome {
        let target = self.resolve_drop(zone_id);
        self.apply(Mutation::InsertFromPalette { definition, target })
    }

    /// Focus an element for the properties panel. Unknown ids clear
    /// the selection.
    pub fn select(&mut self, element_id: Option<String>) {
        self.selection =
            element_id.filter(|id| find_element(&self.document.elements, id).is_some());
    }

    /// Snapshot of the currently focused element, if it still exists.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection
            .as_deref()
            .and_then(|id| find_element(&self.document.elements, id))
    }

    pub fn selection_id(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn elements(&self) -> &[Element] {
        &self.document.elements
    }

    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Host acknowledges a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Check the id-uniqueness invariant. Violations indicate a caller
    /// bypassing the id generator, not a runtime condition.
    pub fn validate(&self) -> Result<(), EditorError> {
        let mut ids = Vec::new();
        collect_ids(&self.document.elements, &mut ids);
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if !seen.insert(id.clone()) {
                return Err(EditorError::DuplicateId(id));
            }
        }
        Ok(())
    }

    /// Selection must never point outside the tree.
    fn refresh_selection(&mut self) {
        if let Some(id) = &self.selection {
            if find_element(&self.document.elements, id).is_none() {
                self.selection = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutations::ElementPatch;
    use serde_json::json;

    fn text_def() -> ComponentDefinition {
        ComponentDefinition::new("text").with_label("Text")
    }

    #[test]
    fn test_insert_selects_new_element() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        let outcome = store.apply(Mutation::InsertFromPalette {
            definition: text_def(),
            target: DropTarget::RootAppend,
        });

        assert_eq!(store.selection_id(), outcome.element_id());
        assert_eq!(store.version(), 1);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        let id = store
            .apply(Mutation::InsertFromPalette {
                definition: text_def(),
                target: DropTarget::RootAppend,
            })
            .element_id()
            .unwrap()
            .to_string();

        store.apply(Mutation::Delete { element_id: id });
        assert!(store.selection_id().is_none());
        assert!(store.selected_element().is_none());
    }

    #[test]
    fn test_update_refreshes_selected_snapshot() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        let id = store
            .apply(Mutation::InsertFromPalette {
                definition: text_def(),
                target: DropTarget::RootAppend,
            })
            .element_id()
            .unwrap()
            .to_string();

        store.apply(Mutation::Update {
            element_id: id,
            patch: ElementPatch {
                label: Some("Email".to_string()),
                ..Default::default()
            },
        });

        assert_eq!(
            store.selected_element().and_then(|e| e.label.as_deref()),
            Some("Email")
        );
    }

    #[test]
    fn test_ignored_mutation_leaves_version_and_dirty_alone() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        let outcome = store.apply(Mutation::Delete {
            element_id: "ghost".to_string(),
        });

        assert_eq!(outcome, MutationOutcome::Ignored);
        assert_eq!(store.version(), 0);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_select_unknown_id_clears() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        store.select(Some("ghost".to_string()));
        assert!(store.selection_id().is_none());
    }

    #[test]
    fn test_stats_track_mutations() {
        let mut store = EditorStore::new("Page", EditorMode::Zone);
        assert_eq!(store.stats().total, 0);

        store.apply(Mutation::InsertFromPalette {
            definition: ComponentDefinition::new("section")
                .container()
                .with_default("columns", json!(2)),
            target: DropTarget::RootAppend,
        });

        assert_eq!(store.stats().total, 1);
        assert_eq!(store.stats().containers, 1);
    }

    #[test]
    fn test_json_round_trip_preserves_tree_not_selection() {
        let mut store = EditorStore::new("Form", EditorMode::Form);
        store.apply(Mutation::InsertFromPalette {
            definition: text_def(),
            target: DropTarget::RootAppend,
        });

        let json = store.to_json().unwrap();
        let restored = EditorStore::from_json(&json).unwrap();

        assert_eq!(restored.elements().len(), 1);
        // Selection is session state, not persisted
        assert!(restored.selection_id().is_none());
        assert_eq!(restored.version(), 0);
    }
}
