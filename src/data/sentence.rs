use crate::digraph::{DirectedGraph, GraphAccess, GraphError};
use crate::error::{FeatureError, Result};
use crate::types::{Mention, Token};

/// Preprocessed sentence: tokens, argument candidates in textual order, and
/// the dependency graph when the parser produced one.
///
/// Read-only once built; the feature generator only borrows it.
#[derive(Debug, Clone)]
pub struct SentenceInstance {
    pub id: String,
    tokens: Vec<Token>,
    mentions: Vec<Mention>,
    graph: Option<DirectedGraph>,
}

impl SentenceInstance {
    /// Build an instance, checking mention spans and graph size against the
    /// token count.
    pub fn new(
        id: impl Into<String>,
        tokens: Vec<Token>,
        mentions: Vec<Mention>,
        graph: Option<DirectedGraph>,
    ) -> Result<Self> {
        for (index, mention) in mentions.iter().enumerate() {
            mention.validate(index, tokens.len())?;
        }
        if let Some(graph) = &graph {
            if graph.node_count() > tokens.len() {
                return Err(FeatureError::Graph(GraphError::NodeOutOfBounds(graph.node_count() - 1)));
            }
        }
        Ok(Self { id: id.into(), tokens, mentions, graph })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    pub fn mention_count(&self) -> usize {
        self.mentions.len()
    }

    pub fn graph(&self) -> Option<&DirectedGraph> {
        self.graph.as_ref()
    }

    pub fn token(&self, index: usize) -> Result<&Token> {
        self.tokens
            .get(index)
            .ok_or(FeatureError::TokenOutOfRange { index, len: self.tokens.len() })
    }

    pub fn mention(&self, index: usize) -> Result<&Mention> {
        self.mentions
            .get(index)
            .ok_or(FeatureError::EntityOutOfRange { index, len: self.mentions.len() })
    }
}
