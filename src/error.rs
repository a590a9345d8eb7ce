//! Error types for feature generation.
//!
//! Missing optional annotation is never an error here: it simply means a
//! feature does not apply. These variants cover malformed input that the
//! generator refuses to paper over.

use thiserror::Error;

use crate::digraph::GraphError;

/// Result type for feature generation.
pub type Result<T> = std::result::Result<T, FeatureError>;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("Token index {index} out of range (sentence has {len} tokens)")]
    TokenOutOfRange { index: usize, len: usize },

    #[error("Entity index {index} out of range (sentence has {len} candidates)")]
    EntityOutOfRange { index: usize, len: usize },

    #[error("Trigger label '{0}' has no entry in the type constraints")]
    UnknownTriggerLabel(String),

    #[error("Index {index} is not present in the {alphabet} alphabet")]
    UnknownLabelIndex { alphabet: &'static str, index: usize },

    #[error("Invalid mention {index}: {reason}")]
    InvalidMention { index: usize, reason: String },

    #[error("Assignment invariant violated: {0}")]
    AssignmentInvariant(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
