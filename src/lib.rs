pub mod data;
pub mod digraph;
pub mod engine;
pub mod error;
pub mod features;
pub mod types;

pub use data::{Document, DocumentParser, LabeledSentence, SentenceInstance};
pub use digraph::{DependencyPath, DirectedGraph, PathTerm, ShortestPath};
pub use engine::{GeneratorConfig, TypeConstraints};
pub use error::{FeatureError, Result};
pub use features::{FeatureTableStats, FeatureTableWriter, GlobalFeatureGenerator};
pub use types::{Alphabet, Alphabets, Mention, SentenceAssignment, Span, Token};
