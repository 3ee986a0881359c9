use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};

/// User identifier: an index in `[0, node_count)`.
pub type NodeId = usize;

/// Undirected social graph over a fixed set of numbered users.
///
/// Each connection is stored in both endpoints' neighbor lists, in insertion
/// order. Self-loops and repeated pairs are kept exactly as inserted, so a
/// self-loop contributes two entries to its node's list.
#[derive(Debug, Clone)]
pub struct SocialGraph {
    node_count: usize,
    adjacency: Vec<Vec<NodeId>>,
    connection_count: usize,
}

impl SocialGraph {
    /// Allocate a graph with `node_count` users and no connections.
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(GraphError::InvalidSize { node_count });
        }
        debug!(node_count, "social graph allocated");
        Ok(Self {
            node_count,
            adjacency: vec![Vec::new(); node_count],
            connection_count: 0,
        })
    }

    /// Build a graph and insert `edges` in order.
    ///
    /// Fails on the first out-of-range pair; no partial graph is returned.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new(node_count)?;
        for (a, b) in edges {
            graph.add_connection(a, b)?;
        }
        Ok(graph)
    }

    /// Check that `node` is a valid id for this graph.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(GraphError::out_of_range(node, self.node_count))
        }
    }

    /// Connect `a` and `b`. Duplicates and self-loops are not filtered.
    pub fn add_connection(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.connection_count += 1;
        trace!(a, b, "connection added");
        Ok(())
    }

    /// Connect `a` and `b` unless that would create a self-loop or a parallel edge.
    ///
    /// Returns whether an edge was inserted.
    pub fn add_unique_connection(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b || self.adjacency[a].contains(&b) {
            return Ok(false);
        }
        self.add_connection(a, b)?;
        Ok(true)
    }

    /// Neighbor list of `node`, in insertion order and with multiplicity.
    pub fn neighbors(&self, node: NodeId) -> Result<&[NodeId]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    /// Number of entries in `node`'s neighbor list.
    pub fn degree(&self, node: NodeId) -> Result<usize> {
        self.check_node(node)?;
        Ok(self.adjacency[node].len())
    }

    pub fn has_connection(&self, a: NodeId, b: NodeId) -> Result<bool> {
        self.check_node(b)?;
        Ok(self.neighbors(a)?.contains(&b))
    }

    /// Direct neighbors of `node` as a set, for membership tests.
    pub(crate) fn neighbor_set(&self, node: NodeId) -> HashSet<NodeId> {
        self.adjacency[node].iter().copied().collect()
    }

    /// Unchecked access for traversals that only follow stored ids.
    pub(crate) fn adjacent(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of successful `add_connection` calls.
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Sum of all degrees. Always twice the connection count.
    pub fn total_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.node_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.len() * size_of::<Vec<NodeId>>();
        let entries: usize = self
            .adjacency
            .iter()
            .map(|v| v.capacity() * size_of::<NodeId>())
            .sum();

        size_of::<Self>() + lists + entries
    }
}
