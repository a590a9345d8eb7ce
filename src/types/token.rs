use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A token with the annotations the global features read.
///
/// Clause ids and synonym sets come from upstream taggers and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: String,
    #[serde(default)]
    pub clause: Option<u32>,
    #[serde(default)]
    pub synonyms: Option<BTreeSet<String>>,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
            clause: None,
            synonyms: None,
        }
    }

    pub fn with_clause(mut self, clause: u32) -> Self {
        self.clause = Some(clause);
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }

    /// Both tokens carry a clause id and the ids agree
    pub fn same_clause(&self, other: &Token) -> bool {
        matches!((self.clause, other.clause), (Some(a), Some(b)) if a == b)
    }

    /// Both tokens carry synonym sets and the sets intersect
    pub fn shares_synonym(&self, other: &Token) -> bool {
        match (&self.synonyms, &other.synonyms) {
            (Some(a), Some(b)) => !a.is_disjoint(b),
            _ => false,
        }
    }
}
