//! Graph access trait for dependency graphs.
//!
//! `GraphAccess` abstracts over how a sentence's dependency graph is stored so
//! the path query in [`crate::digraph::query`] only depends on adjacency and
//! label lookup.

use thiserror::Error;

/// Errors that can occur while building or querying a dependency graph
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node index out of bounds: {0}")]
    NodeOutOfBounds(usize),

    #[error("Edge {from}->{to} references a node outside the sentence ({node_count} tokens)")]
    EdgeOutOfBounds { from: usize, to: usize, node_count: usize },

    #[error("Empty relation label on edge {from}->{to}")]
    EmptyLabel { from: usize, to: usize },
}

/// Unified read access to a labelled dependency graph.
///
/// # Edge Format
/// Edges are returned as `(node, label_id)` pairs where:
/// - `node` is the index of the token on the other end of the edge
/// - `label_id` is an opaque identifier that can be resolved via `get_label()`
pub trait GraphAccess {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over incoming edges for the given node.
    ///
    /// Each edge is a `(source_node, label_id)` pair.
    /// Returns `None` if the node index is out of bounds.
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    /// Returns an iterator over outgoing edges for the given node.
    ///
    /// Each edge is a `(target_node, label_id)` pair.
    /// Returns `None` if the node index is out of bounds.
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>>;

    /// Returns the label string for the given label ID.
    fn get_label(&self, label_id: usize) -> Option<&str>;

    /// Collects the edges touching `node` in either direction, ignoring
    /// orientation. Sorted by `(neighbor, label_id)` so traversals that
    /// consume it expand neighbours in a fixed order.
    fn undirected_neighbors(&self, node: usize) -> Vec<(usize, usize)> {
        let mut neighbors: Vec<(usize, usize)> = Vec::new();
        if let Some(edges) = self.outgoing(node) {
            neighbors.extend(edges);
        }
        if let Some(edges) = self.incoming(node) {
            neighbors.extend(edges);
        }
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }
}
