pub mod graph;
pub mod graph_trait;
pub mod path;
pub mod query;

pub use graph::{DirectedGraph, Vocabulary, EdgePairIterator};
pub use graph_trait::{GraphAccess, GraphError};
pub use path::{DependencyPath, PathTerm, hop_distance};
pub use query::ShortestPath;
