use std::collections::HashMap;

use crate::digraph::graph_trait::{GraphAccess, GraphError};

/// Vocabulary for dependency relation labels within one graph
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    id_to_term: Vec<String>,
    term_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create ID for a term
    pub fn get_or_create_id(&mut self, term: &str) -> usize {
        if let Some(&id) = self.term_to_id.get(term) {
            id
        } else {
            let id = self.id_to_term.len();
            self.id_to_term.push(term.to_string());
            self.term_to_id.insert(term.to_string(), id);
            id
        }
    }

    /// Get term for an ID
    pub fn get_term(&self, id: usize) -> Option<&str> {
        self.id_to_term.get(id).map(|s| s.as_str())
    }
}

/// Dependency graph over the tokens of one sentence.
///
/// Adjacency is stored as flattened `(node, label_id)` pairs per node:
/// `outgoing[head] = [dependent, label, dependent, label, ...]` and the mirror
/// image in `incoming`. Every token of the sentence is a node, including
/// tokens without any attached edge.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Incoming edges for each node as flattened (source_node, label_id) pairs
    incoming: Vec<Vec<usize>>,
    /// Outgoing edges for each node as flattened (target_node, label_id) pairs
    outgoing: Vec<Vec<usize>>,
    vocabulary: Vocabulary,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `node_count` isolated nodes.
    pub fn with_nodes(node_count: usize) -> Self {
        let mut graph = Self::new();
        if node_count > 0 {
            graph.add_node(node_count - 1);
        }
        graph
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, node_id: usize) {
        while self.incoming.len() <= node_id {
            self.incoming.push(Vec::new());
        }
        while self.outgoing.len() <= node_id {
            self.outgoing.push(Vec::new());
        }
    }

    /// Add a labelled edge `from -> to` (head to dependent)
    pub fn add_edge(&mut self, from: usize, to: usize, label: &str) {
        self.add_node(from);
        self.add_node(to);

        let label_id = self.vocabulary.get_or_create_id(label);

        self.outgoing[from].push(to);
        self.outgoing[from].push(label_id);

        self.incoming[to].push(from);
        self.incoming[to].push(label_id);
    }

    /// Build the graph of a sentence with `node_count` tokens, rejecting edges
    /// that point outside it.
    pub fn from_sentence_edges(
        node_count: usize,
        edges: &[(usize, usize, String)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_nodes(node_count);
        for (from, to, label) in edges {
            if *from >= node_count || *to >= node_count {
                return Err(GraphError::EdgeOutOfBounds { from: *from, to: *to, node_count });
            }
            if label.is_empty() {
                return Err(GraphError::EmptyLabel { from: *from, to: *to });
            }
            graph.add_edge(*from, *to, label);
        }
        Ok(graph)
    }
}

/// Iterator over edges stored as flattened (node, label_id) pairs.
pub struct EdgePairIterator<'a> {
    edges: &'a [usize],
    pos: usize,
}

impl<'a> EdgePairIterator<'a> {
    fn new(edges: &'a [usize]) -> Self {
        Self { edges, pos: 0 }
    }
}

impl<'a> Iterator for EdgePairIterator<'a> {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos + 1 < self.edges.len() {
            let node = self.edges[self.pos];
            let label_id = self.edges[self.pos + 1];
            self.pos += 2;
            Some((node, label_id))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.edges.len() - self.pos) / 2;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for EdgePairIterator<'a> {}

impl GraphAccess for DirectedGraph {
    #[inline]
    fn node_count(&self) -> usize {
        self.incoming.len().max(self.outgoing.len())
    }

    #[inline]
    fn incoming(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.incoming.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn outgoing(&self, node: usize) -> Option<impl Iterator<Item = (usize, usize)>> {
        self.outgoing.get(node).map(|edges| EdgePairIterator::new(edges))
    }

    #[inline]
    fn get_label(&self, label_id: usize) -> Option<&str> {
        self.vocabulary.get_term(label_id)
    }
}
