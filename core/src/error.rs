//! Error types for graph construction and queries.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for social graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by [`SocialGraph`](crate::SocialGraph) and the query functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph must hold at least one user.
    #[error("invalid graph size: node count must be positive, got {node_count}")]
    InvalidSize { node_count: usize },

    /// A node id outside `[0, node_count)`.
    #[error("node {node} out of range for graph with {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },
}

impl GraphError {
    pub fn out_of_range(node: NodeId, node_count: usize) -> Self {
        Self::OutOfRange { node, node_count }
    }
}
