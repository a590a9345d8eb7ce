//! Features linking two triggers through a shared argument.

use crate::data::SentenceInstance;
use crate::engine::constants::*;
use crate::error::Result;
use crate::features::canonical::{role_with_label, sorted_pair};
use crate::features::paths::{path_between, render_path};
use crate::features::GlobalFeatureGenerator;
use crate::types::SentenceAssignment;

impl GlobalFeatureGenerator<'_> {
    /// For `entity` with a non-default role under `trigger`, compare against
    /// every earlier argument-bearing trigger.
    ///
    /// `same_mention_*` fires when the earlier trigger also takes this very
    /// mention as an argument. `same_entity_*` fires once per other mention
    /// of the same entity that the earlier trigger takes as an argument.
    pub fn sentence_level_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        trigger: usize,
        entity: usize,
    ) -> Result<Vec<String>> {
        self.check_sentence(inst, assn)?;
        let label = self.label_at(assn, trigger)?;
        let mention = inst.mention(entity)?;
        if self.is_default_trigger(&label) {
            return Ok(Vec::new());
        }
        let Some(role) = self.argument_role(assn, trigger, entity)? else {
            return Ok(Vec::new());
        };
        let qualified_role = role_with_label(&role, &label);

        let mut features = Vec::new();
        for prev in 0..trigger {
            let prev_label = self.label_at(assn, prev)?;
            if !self.config.is_argumentable(&prev_label) || assn.roles_for(prev).is_none() {
                continue;
            }
            let triggers = sorted_pair(&label, &prev_label);

            if let Some(prev_role) = self.argument_role(assn, prev, entity)? {
                features.push(format!("{}{}", SAME_MENTION_TRIGGERS, triggers));
                features.push(format!(
                    "{}{}",
                    SAME_MENTION_ROLES,
                    sorted_pair(&qualified_role, &role_with_label(&prev_role, &prev_label))
                ));
                if let Some(path) = path_between(inst, &[trigger], &[prev]) {
                    let rendered = render_path(inst, &path, None, &self.config.trigger_word_sentinel);
                    features.push(format!("{}{}", SAME_MENTION_DEP, rendered));
                }
            }

            for (other, other_mention) in inst.mentions().iter().enumerate() {
                if other == entity || !mention.coreferent_with(other_mention) {
                    continue;
                }
                if let Some(prev_role) = self.argument_role(assn, prev, other)? {
                    features.push(format!("{}{}", SAME_ENTITY_TRIGGERS, triggers));
                    features.push(format!(
                        "{}{}",
                        SAME_ENTITY_ROLES,
                        sorted_pair(&qualified_role, &role_with_label(&prev_role, &prev_label))
                    ));
                }
            }
        }
        Ok(features)
    }
}
