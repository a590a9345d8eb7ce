//! Features over pairs of triggers in one sentence.

use std::sync::Arc;

use crate::data::SentenceInstance;
use crate::engine::constants::*;
use crate::error::Result;
use crate::features::canonical::sorted_pair;
use crate::features::paths::{path_between, render_path};
use crate::features::GlobalFeatureGenerator;
use crate::types::SentenceAssignment;

impl GlobalFeatureGenerator<'_> {
    /// Trigger co-occurrence features for the token at `index` against every
    /// earlier trigger, skipping the immediately preceding token.
    pub fn trigger_pair_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        index: usize,
    ) -> Result<Vec<String>> {
        self.check_sentence(inst, assn)?;
        let label = self.label_at(assn, index)?;
        let token = inst.token(index)?;
        let is_trigger = !self.is_default_trigger(&label);

        let mut features = Vec::new();
        let mut history: Vec<Arc<str>> = Vec::new();

        for prev in 0..index.saturating_sub(1) {
            let prev_label = self.label_at(assn, prev)?;
            if self.is_default_trigger(&prev_label) {
                continue;
            }
            let prev_token = inst.token(prev)?;

            if is_trigger {
                if !history.contains(&prev_label) {
                    history.push(Arc::clone(&prev_label));
                }
                let pair = sorted_pair(&label, &prev_label);
                features.push(format!(
                    "{}{}#{}",
                    TRIGGER_PAIR_SAME_CLAUSE,
                    pair,
                    token.same_clause(prev_token)
                ));
                match path_between(inst, &[index], &[prev]) {
                    Some(path) if path.hop_distance() <= self.config.max_path_distance => {
                        let rendered = render_path(inst, &path, None, &self.config.trigger_word_sentinel);
                        features.push(format!("{}{}#{}", TRIGGER_PAIR_DEP_PATH, pair, rendered));
                    }
                    Some(_) => {}
                    None => log::debug!("No dependency path between triggers {} and {}", prev, index),
                }
            }

            if token.shares_synonym(prev_token) {
                features.push(format!("{}{}", SAME_WORD_SAME_LABEL, label == prev_label));
            }
        }

        if is_trigger {
            features.extend(
                history
                    .iter()
                    .map(|prev_label| format!("{}{}", TRIGGER_PAIR, sorted_pair(&label, prev_label))),
            );
        }
        Ok(features)
    }
}
