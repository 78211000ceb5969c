//! Tree statistics, recomputed after every mutation.

use mosaic_model::{Element, EditorMode};
use serde::Serialize;

/// Summary counts over the current tree. Purely derived; one pre-order
/// pass over every node, synthetic columns included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    /// Every node in the tree, nested columns included.
    pub total: usize,
    /// Containers other than synthetic columns.
    pub containers: usize,
    /// Leaf elements.
    pub leaves: usize,
    /// Synthetic column containers.
    pub columns: usize,
}

impl TreeStats {
    pub fn compute(elements: &[Element]) -> Self {
        let mut stats = Self::default();
        stats.visit(elements);
        stats
    }

    fn visit(&mut self, elements: &[Element]) {
        for element in elements {
            self.total += 1;
            if element.is_column() {
                self.columns += 1;
            } else if element.is_container() {
                self.containers += 1;
            } else {
                self.leaves += 1;
            }
            if let Some(children) = &element.children {
                self.visit(children);
            }
        }
    }

    /// Mode-specific one-line summary, e.g. `"2 sections, 5 fields"`.
    pub fn summary(&self, mode: EditorMode) -> String {
        format!(
            "{} {}, {} {}",
            self.containers,
            mode.container_noun(),
            self.leaves,
            mode.leaf_noun()
        )
    }
}
