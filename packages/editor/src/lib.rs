//! # Mosaic Editor
//!
//! Mutation and drag-and-drop reconciliation engine for the Mosaic
//! builder tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ drag layer: (definition, drop-zone id)      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: resolve → mutate → refresh          │
//! │  - DropTarget: decode drop-zone grammar     │
//! │  - Mutation: insert/reorder/update/         │
//! │    delete/duplicate                         │
//! │  - EditorStore: selection + stats + version │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host: renderer, properties panel, storage   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is the source of truth**: selection and statistics
//!    are derived views, refreshed after every mutation.
//! 2. **Fail-open**: live-gesture misses (stale ids, malformed drop
//!    zones, out-of-range indices) degrade to no-ops, never errors.
//! 3. **One gesture, one mutation**: every operation is synchronous
//!    and total; two mutations never interleave.
//!
//! ## Usage
//!
//! ```rust
//! use mosaic_editor::{ComponentDefinition, EditorMode, EditorStore};
//!
//! let mut store = EditorStore::new("Contact form", EditorMode::Form);
//!
//! // A palette drop on the empty canvas
//! let section = ComponentDefinition::new("section").container();
//! let outcome = store.insert_at_zone(section, "canvas");
//! assert!(outcome.is_applied());
//!
//! // The new element is focused for the properties panel
//! assert!(store.selected_element().is_some());
//! ```

mod drop_target;
mod errors;
mod mutations;
mod stats;
mod store;

pub use drop_target::{DropTarget, CANVAS_SENTINELS, DROP_ZONE_PREFIX};
pub use errors::EditorError;
pub use mutations::{ElementPatch, Mutation, MutationOutcome};
pub use stats::TreeStats;
pub use store::EditorStore;

// Re-export common model types for convenience
pub use mosaic_model::{ComponentDefinition, Document, EditorMode, Element};
