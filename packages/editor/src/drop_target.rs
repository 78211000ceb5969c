//! # Drop-Target Resolution
//!
//! Drop zones are rendered dynamically and their string identifiers
//! are the only channel carrying intent from the drag layer into the
//! tree layer. This module decodes that grammar into a small tagged
//! union so every call site pattern-matches instead of re-deriving
//! string conventions.
//!
//! Resolution is total: every input string maps to exactly one target,
//! degrading to [`DropTarget::RootAppend`] when nothing else matches.
//! Stale identifiers (a drag-end referencing a just-deleted container)
//! must resolve safely, never error.

use mosaic_model::{find_element, Element};
use serde::{Deserialize, Serialize};

/// Reserved identifiers for the empty-canvas drop zones.
pub const CANVAS_SENTINELS: [&str; 3] = ["canvas", "root", "canvas-drop-zone"];

/// Prefix carried by numbered insertion-slot and container drop zones.
pub const DROP_ZONE_PREFIX: &str = "drop-zone-";

/// Infix separating a container id from its column slot number.
const COLUMN_INFIX: &str = "-col-";

/// Structured insertion target decoded from a drop-zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DropTarget {
    /// Append at the end of the root list.
    RootAppend,
    /// Splice into the root list at `index` (clamped on apply).
    RootInsertAt { index: usize },
    /// Append to the named container's children.
    ContainerAppend { container_id: String },
    /// Append to one column slot of the named container, creating the
    /// column on first use.
    ContainerColumnAppend {
        container_id: String,
        column_index: usize,
    },
}

impl DropTarget {
    /// Decode `zone_id` against the current tree.
    ///
    /// Order matters: canvas sentinels, then numbered slots, then the
    /// `<id>-col-<n>` column grammar, then a bare container id. A
    /// container id that no longer exists in the tree falls open to
    /// `RootAppend`.
    pub fn resolve(zone_id: &str, elements: &[Element]) -> DropTarget {
        if CANVAS_SENTINELS.contains(&zone_id) {
            return DropTarget::RootAppend;
        }

        let remainder = zone_id.strip_prefix(DROP_ZONE_PREFIX).unwrap_or(zone_id);

        if let Ok(index) = remainder.parse::<usize>() {
            return DropTarget::RootInsertAt { index };
        }

        if let Some((container_id, column_index)) = split_column_suffix(remainder) {
            if find_element(elements, container_id).is_some() {
                return DropTarget::ContainerColumnAppend {
                    container_id: container_id.to_string(),
                    column_index,
                };
            }
            tracing::warn!(%zone_id, "column drop zone names unknown container");
            return DropTarget::RootAppend;
        }

        if find_element(elements, remainder).is_some() {
            return DropTarget::ContainerAppend {
                container_id: remainder.to_string(),
            };
        }

        tracing::warn!(%zone_id, "unresolvable drop zone, appending to root");
        DropTarget::RootAppend
    }
}

/// Split `<id>-col-<n>` into `(id, n)`. Uses the last occurrence so
/// container ids containing the infix still decode.
fn split_column_suffix(identifier: &str) -> Option<(&str, usize)> {
    let at = identifier.rfind(COLUMN_INFIX)?;
    let (head, tail) = identifier.split_at(at);
    let n = tail[COLUMN_INFIX.len()..].parse::<usize>().ok()?;
    if head.is_empty() {
        return None;
    }
    Some((head, n))
}
