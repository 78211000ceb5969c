//! Error types for the editor.
//!
//! Live-gesture misses never reach here; `Mutation::apply` absorbs
//! them as no-ops. These variants cover the conditions worth surfacing
//! to the host: integration bugs and the serialization boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// A caller bypassed the id generator and introduced a collision.
    #[error("duplicate element id: {0}")]
    DuplicateId(String),

    /// An integration tried to give children to a leaf element.
    #[error("element {0} does not accept children")]
    NotAContainer(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
