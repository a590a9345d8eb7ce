//! Shortest-path queries over dependency graphs.
//!
//! Paths are searched on the undirected view of the graph: a dependency edge
//! can be crossed from head to dependent or back.
//!
//! Among several shortest paths the result is fixed by the search order:
//! sources are seeded in ascending token order, neighbours are expanded in
//! ascending `(token, label_id)` order, and the first target discovered wins.

use std::collections::VecDeque;

use crate::digraph::graph_trait::GraphAccess;
use crate::digraph::path::{DependencyPath, PathTerm};

/// Shortest-path extension for any [`GraphAccess`] implementation.
pub trait ShortestPath: GraphAccess {
    /// Minimum-hop path from any vertex of `from` to any vertex of `to`.
    ///
    /// Returns `None` when the two sets lie in different components. Indices
    /// outside the graph are ignored.
    fn shortest_path(&self, from: &[usize], to: &[usize]) -> Option<DependencyPath> {
        let node_count = self.node_count();

        let mut is_target = vec![false; node_count];
        for &t in to.iter().filter(|&&t| t < node_count) {
            is_target[t] = true;
        }

        let mut sources: Vec<usize> = from.iter().copied().filter(|&s| s < node_count).collect();
        sources.sort_unstable();
        sources.dedup();

        if let Some(&shared) = sources.iter().find(|&&s| is_target[s]) {
            return Some(DependencyPath::from_terms(vec![PathTerm::Vertex(shared)]));
        }

        let mut visited = vec![false; node_count];
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; node_count];
        let mut queue = VecDeque::new();

        for &s in &sources {
            visited[s] = true;
            queue.push_back(s);
        }

        while let Some(current) = queue.pop_front() {
            for (neighbor, label_id) in self.undirected_neighbors(current) {
                if neighbor >= node_count || visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;
                parent[neighbor] = Some((current, label_id));
                if is_target[neighbor] {
                    return Some(reconstruct_path(self, neighbor, &parent));
                }
                queue.push_back(neighbor);
            }
        }

        log::debug!("No dependency path between {:?} and {:?}", from, to);
        None
    }
}

impl<G: GraphAccess> ShortestPath for G {}

fn reconstruct_path<G: GraphAccess + ?Sized>(
    graph: &G,
    end: usize,
    parent: &[Option<(usize, usize)>],
) -> DependencyPath {
    let mut reversed = vec![PathTerm::Vertex(end)];
    let mut node = end;
    while let Some((previous, label_id)) = parent[node] {
        let label = graph.get_label(label_id).unwrap_or_default();
        reversed.push(PathTerm::Edge(label.to_string()));
        reversed.push(PathTerm::Vertex(previous));
        node = previous;
    }
    reversed.reverse();
    DependencyPath::from_terms(reversed)
}
