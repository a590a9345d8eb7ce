//! Dependency paths as alternating vertex / edge terms.

use std::fmt;

/// One step of a dependency path: either a token or the relation crossed to
/// reach the next token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTerm {
    Vertex(usize),
    Edge(String),
}

impl fmt::Display for PathTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathTerm::Vertex(index) => write!(f, "{}", index),
            PathTerm::Edge(label) => f.write_str(label),
        }
    }
}

/// A shortest path `Vertex, Edge, Vertex, ..., Edge, Vertex`.
///
/// Always starts and ends with a vertex; a path between a token and itself
/// is the single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPath {
    terms: Vec<PathTerm>,
}

impl DependencyPath {
    pub(crate) fn from_terms(terms: Vec<PathTerm>) -> Self {
        debug_assert!(matches!(terms.first(), Some(PathTerm::Vertex(_))));
        debug_assert!(matches!(terms.last(), Some(PathTerm::Vertex(_))));
        Self { terms }
    }

    pub fn terms(&self) -> &[PathTerm] {
        &self.terms
    }

    pub fn source(&self) -> usize {
        match self.terms.first() {
            Some(PathTerm::Vertex(index)) => *index,
            _ => unreachable!("dependency path must start with a vertex"),
        }
    }

    pub fn target(&self) -> usize {
        match self.terms.last() {
            Some(PathTerm::Vertex(index)) => *index,
            _ => unreachable!("dependency path must end with a vertex"),
        }
    }

    /// Terms strictly between the two endpoints.
    pub fn interior(&self) -> &[PathTerm] {
        if self.terms.len() < 2 {
            &[]
        } else {
            &self.terms[1..self.terms.len() - 1]
        }
    }

    /// Number of edges crossed, recovered from the interior term count.
    pub fn hop_distance(&self) -> usize {
        hop_distance(self.interior().len())
    }

    /// Render the interior terms joined by `#`. Vertices are rendered through
    /// `vertex_text`, edges by their relation label.
    pub fn render_with<'s, F>(&self, mut vertex_text: F) -> String
    where
        F: FnMut(usize) -> &'s str,
    {
        let mut rendered = String::new();
        for (i, term) in self.interior().iter().enumerate() {
            if i > 0 {
                rendered.push('#');
            }
            match term {
                PathTerm::Vertex(index) => rendered.push_str(vertex_text(*index)),
                PathTerm::Edge(label) => rendered.push_str(label),
            }
        }
        rendered
    }
}

/// `(termCount + 1) / 2`: a path with `k` hops has `2k - 1` interior terms.
pub fn hop_distance(interior_terms: usize) -> usize {
    (interior_terms + 1) / 2
}
