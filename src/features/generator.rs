//! The global feature generator facade.
//!
//! A `GlobalFeatureGenerator` borrows the run-wide settings (config, role
//! constraints, alphabets) and answers feature queries against one sentence
//! and one fixed assignment at a time. It holds no per-sentence state, so a
//! single generator can be shared by worker threads.

use std::sync::Arc;

use rayon::prelude::*;

use crate::data::{LabeledSentence, SentenceInstance};
use crate::engine::{GeneratorConfig, TypeConstraints};
use crate::error::{FeatureError, Result};
use crate::types::{Alphabets, SentenceAssignment};

pub struct GlobalFeatureGenerator<'a> {
    pub(crate) config: &'a GeneratorConfig,
    pub(crate) constraints: &'a TypeConstraints,
    pub(crate) alphabets: &'a Alphabets,
}

impl<'a> GlobalFeatureGenerator<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        constraints: &'a TypeConstraints,
        alphabets: &'a Alphabets,
    ) -> Self {
        Self { config, constraints, alphabets }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    pub fn alphabets(&self) -> &Alphabets {
        self.alphabets
    }

    /// All global features for token `index`: trigger pairs, role counts,
    /// and the argument-level families for every candidate in order.
    pub fn token_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        index: usize,
    ) -> Result<Vec<String>> {
        let mut features = self.trigger_pair_features(inst, assn, index)?;
        features.extend(self.node_completion_features(inst, assn, index)?);
        for entity in 0..inst.mention_count() {
            features.extend(self.node_level_features(inst, assn, index, entity)?);
            features.extend(self.sentence_level_features(inst, assn, index, entity)?);
        }
        Ok(features)
    }

    /// [`GlobalFeatureGenerator::token_features`] for every token
    pub fn assignment_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
    ) -> Result<Vec<Vec<String>>> {
        (0..inst.len())
            .map(|index| self.token_features(inst, assn, index))
            .collect()
    }

    /// Run over a corpus, one sentence per rayon task. Results keep the
    /// input order.
    pub fn extract_corpus(&self, sentences: &[LabeledSentence]) -> Result<Vec<Vec<Vec<String>>>> {
        log::info!("Extracting global features for {} sentences", sentences.len());
        sentences
            .par_iter()
            .map(|s| self.assignment_features(&s.instance, &s.assignment))
            .collect()
    }

    pub(crate) fn check_sentence(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
    ) -> Result<()> {
        if inst.len() != assn.token_count() {
            return Err(FeatureError::AssignmentInvariant(format!(
                "assignment covers {} tokens but sentence '{}' has {}",
                assn.token_count(),
                inst.id,
                inst.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn label_at(&self, assn: &SentenceAssignment, index: usize) -> Result<Arc<str>> {
        self.alphabets.triggers.label(assn.label_index_at(index)?)
    }

    pub(crate) fn role_label(&self, role: usize) -> Result<Arc<str>> {
        self.alphabets.roles.label(role)
    }

    pub(crate) fn is_default_trigger(&self, label: &str) -> bool {
        label == self.config.default_trigger_label
    }

    pub(crate) fn is_default_role(&self, role: &str) -> bool {
        role == self.config.default_role_label
    }

    /// Role of `entity` under `trigger`, resolved to its label, `None` when
    /// undecided or the default role
    pub(crate) fn argument_role(
        &self,
        assn: &SentenceAssignment,
        trigger: usize,
        entity: usize,
    ) -> Result<Option<Arc<str>>> {
        match assn.role_of(trigger, entity) {
            Some(role) => {
                let role = self.role_label(role)?;
                Ok((!self.is_default_role(&role)).then_some(role))
            }
            None => Ok(None),
        }
    }
}
