use serde::{Deserialize, Serialize};

use crate::data::SentenceInstance;
use crate::digraph::DirectedGraph;
use crate::engine::GeneratorConfig;
use crate::error::{FeatureError, Result};
use crate::types::{Alphabets, Mention, SentenceAssignment, Token};

/// A document: an id and its preprocessed sentences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub sentences: Vec<SentenceRecord>,
}

/// One sentence as produced by the preprocessing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    /// `(head, dependent, relation)`; absent when the sentence was not parsed
    #[serde(default)]
    pub dependencies: Option<Vec<(usize, usize, String)>>,
    /// Gold events, if annotated
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub trigger: usize,
    pub label: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentRecord {
    pub mention: usize,
    pub role: String,
}

impl Document {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Event mention count over all sentences
    pub fn event_count(&self) -> usize {
        self.sentences.iter().map(|s| s.events.len()).sum()
    }
}

impl SentenceRecord {
    pub fn to_instance(&self, id: impl Into<String>) -> Result<SentenceInstance> {
        let graph = match &self.dependencies {
            Some(edges) => Some(DirectedGraph::from_sentence_edges(self.tokens.len(), edges)?),
            None => None,
        };
        SentenceInstance::new(id, self.tokens.clone(), self.mentions.clone(), graph)
    }

    /// Gold assignment: every annotated trigger, with every candidate given
    /// either its annotated role or the default role.
    pub fn to_assignment(
        &self,
        alphabets: &Alphabets,
        config: &GeneratorConfig,
    ) -> Result<SentenceAssignment> {
        let mut assn =
            SentenceAssignment::empty(self.tokens.len(), alphabets, &config.default_trigger_label);
        let default_role = alphabets.roles.get_or_insert(&config.default_role_label);

        for event in &self.events {
            assn.assign_trigger(alphabets, event.trigger, &event.label)?;
            if !config.is_argumentable(&event.label) {
                continue;
            }
            for entity in 0..self.mentions.len() {
                if assn.role_of(event.trigger, entity).is_none() {
                    assn.set_role(event.trigger, entity, default_role)?;
                }
            }
            for argument in &event.arguments {
                if argument.mention >= self.mentions.len() {
                    return Err(FeatureError::EntityOutOfRange {
                        index: argument.mention,
                        len: self.mentions.len(),
                    });
                }
                assn.assign_role(alphabets, event.trigger, argument.mention, &argument.role)?;
            }
        }
        Ok(assn)
    }
}
