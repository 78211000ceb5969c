//! # Mosaic Model
//!
//! Element tree data model shared by the Mosaic form, zone and email
//! builders.
//!
//! The tree is an ordered list of root [`Element`]s; each element
//! carries an open property bag and, for containers, an ordered child
//! list. Everything serializes as plain JSON for the host's
//! persistence layer.
//!
//! Structural mutation lives in `mosaic-editor`; this crate only
//! provides the shapes, traversal helpers and id generation.

mod definition;
mod document;
mod element;
mod id;

pub use definition::ComponentDefinition;
pub use document::{Document, EditorMode};
pub use element::{
    collect_ids, find_element, find_element_mut, ids_are_unique, remove_element, tree_node_count,
    Element, COLUMN_INDEX_KEY, COLUMN_KIND,
};
pub use id::generate_id;
