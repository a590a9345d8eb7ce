//! Event argument candidates.
//!
//! A candidate is an entity mention, a value mention (job titles, crimes,
//! sentences, ...) or a time expression. All three expose the same
//! extent / head / type / coreference queries; only entity mentions carry a
//! head distinct from their extent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, Result};
use crate::types::Span;

/// Identity of a coreference chain. Mentions with equal ids co-refer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorefId(pub String);

impl CorefId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CorefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mention {
    Entity {
        extent: Span,
        head: Span,
        #[serde(rename = "type")]
        mention_type: String,
        #[serde(default)]
        parent: Option<CorefId>,
    },
    Value {
        extent: Span,
        #[serde(rename = "type")]
        mention_type: String,
        #[serde(default)]
        parent: Option<CorefId>,
    },
    Time {
        extent: Span,
        #[serde(rename = "type")]
        mention_type: String,
        #[serde(default)]
        parent: Option<CorefId>,
    },
}

impl Mention {
    pub fn entity(extent: Span, head: Span, mention_type: impl Into<String>) -> Self {
        Mention::Entity { extent, head, mention_type: mention_type.into(), parent: None }
    }

    pub fn value(extent: Span, mention_type: impl Into<String>) -> Self {
        Mention::Value { extent, mention_type: mention_type.into(), parent: None }
    }

    pub fn time(extent: Span) -> Self {
        Mention::Time { extent, mention_type: "Timex2".to_string(), parent: None }
    }

    pub fn with_parent(mut self, id: impl Into<String>) -> Self {
        let id = Some(CorefId::new(id));
        match &mut self {
            Mention::Entity { parent, .. }
            | Mention::Value { parent, .. }
            | Mention::Time { parent, .. } => *parent = id,
        }
        self
    }

    pub fn extent(&self) -> Span {
        match self {
            Mention::Entity { extent, .. }
            | Mention::Value { extent, .. }
            | Mention::Time { extent, .. } => *extent,
        }
    }

    /// Head span; values and times use their whole extent
    pub fn head(&self) -> Span {
        match self {
            Mention::Entity { head, .. } => *head,
            Mention::Value { extent, .. } | Mention::Time { extent, .. } => *extent,
        }
    }

    pub fn mention_type(&self) -> &str {
        match self {
            Mention::Entity { mention_type, .. }
            | Mention::Value { mention_type, .. }
            | Mention::Time { mention_type, .. } => mention_type,
        }
    }

    pub fn parent(&self) -> Option<&CorefId> {
        match self {
            Mention::Entity { parent, .. }
            | Mention::Value { parent, .. }
            | Mention::Time { parent, .. } => parent.as_ref(),
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Mention::Entity { .. })
    }

    /// Both mentions belong to a known chain and it is the same chain
    pub fn coreferent_with(&self, other: &Mention) -> bool {
        matches!((self.parent(), other.parent()), (Some(a), Some(b)) if a == b)
    }

    /// Head token indices, used as the endpoint set of dependency paths
    pub fn head_indices(&self) -> Vec<usize> {
        self.head().indices().collect()
    }

    /// Check the span invariants against a sentence of `token_count` tokens.
    pub fn validate(&self, index: usize, token_count: usize) -> Result<()> {
        let extent = self.extent();
        let head = self.head();
        let invalid = |reason: String| FeatureError::InvalidMention { index, reason };

        if extent.is_empty() {
            return Err(invalid(format!("empty extent {:?}", extent)));
        }
        if extent.end > token_count {
            return Err(invalid(format!(
                "extent {:?} exceeds sentence length {}",
                extent, token_count
            )));
        }
        if head.is_empty() || !head.within(&extent) {
            return Err(invalid(format!("head {:?} is not inside extent {:?}", head, extent)));
        }
        Ok(())
    }
}
