//! Error types for the scene model

use crate::node::NodeId;

/// Scene access and loading errors
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Node id not present in the document
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Two nodes share an id
    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// Operation requires a different node category
    #[error("node {id} is {actual}, expected {expected}")]
    WrongCategory {
        /// Offending node
        id: NodeId,
        /// Category the operation needs
        expected: String,
        /// Category found
        actual: String,
    },

    /// Host rejected a write
    #[error("cannot write name of {id}: {reason}")]
    WriteRejected {
        /// Target node
        id: NodeId,
        /// Host reason
        reason: String,
    },

    /// Document JSON could not be parsed or produced
    #[error("document json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Create wrong-category error
    #[inline]
    pub fn wrong_category(
        id: NodeId,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::WrongCategory {
            id,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
