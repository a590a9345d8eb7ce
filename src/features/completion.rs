//! Features computed once a trigger's role map is complete.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::SentenceInstance;
use crate::engine::constants::*;
use crate::error::Result;
use crate::features::canonical::sorted_pair;
use crate::features::GlobalFeatureGenerator;
use crate::types::SentenceAssignment;

impl GlobalFeatureGenerator<'_> {
    /// `roleNum:` counts for every role allowed under the trigger's label,
    /// then one `timeArgPair=` per pair of distinct time roles.
    pub fn node_completion_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        index: usize,
    ) -> Result<Vec<String>> {
        self.check_sentence(inst, assn)?;
        let label = self.label_at(assn, index)?;
        if !self.config.is_argumentable(&label) {
            return Ok(Vec::new());
        }
        let Some(roles) = assn.roles_for(index) else {
            return Ok(Vec::new());
        };

        let mut counts: BTreeMap<String, usize> = self
            .constraints
            .roles_for(&label)?
            .iter()
            .map(|role| (self.count_key(role).to_string(), 0))
            .collect();
        let mut time_roles: Vec<Arc<str>> = Vec::new();

        for (&entity, &role) in roles {
            let role = self.role_label(role)?;
            if self.is_default_role(&role) {
                continue;
            }
            match counts.get_mut(self.count_key(&role)) {
                Some(count) => *count += 1,
                None => log::debug!(
                    "Role '{}' of candidate {} is not allowed for '{}', not counted",
                    role, entity, label
                ),
            }
            if self.config.is_time_role(&role) && !time_roles.contains(&role) {
                time_roles.push(role);
            }
        }

        let mut features: Vec<String> = counts
            .iter()
            .map(|(role, &count)| {
                format!("{}{}#{}#{}", ROLE_NUM, label, role, self.config.bucket_count(count))
            })
            .collect();
        for (i, first) in time_roles.iter().enumerate() {
            for second in &time_roles[i + 1..] {
                features.push(format!("{}{}", TIME_ARG_PAIR, sorted_pair(first, second)));
            }
        }
        Ok(features)
    }

    /// Time roles share a single counter
    fn count_key<'r>(&'r self, role: &'r str) -> &'r str {
        if self.config.is_time_role(role) {
            &self.config.time_bucket
        } else {
            role
        }
    }
}
