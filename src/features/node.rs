//! Features over the arguments of a single trigger.
//!
//! Every family compares the query entity against the candidates that come
//! before it in textual order, nearest first.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::SentenceInstance;
use crate::engine::constants::*;
use crate::error::Result;
use crate::features::canonical::sorted_pair;
use crate::features::paths::{path_between, render_path};
use crate::features::GlobalFeatureGenerator;
use crate::types::{Mention, SentenceAssignment};

/// An earlier candidate with a decided role under the query trigger
struct EarlierArgument<'m> {
    mention: &'m Mention,
    role: Arc<str>,
}

impl GlobalFeatureGenerator<'_> {
    /// `sameRole:`, `oneEntityTwoArgs:`, `entitiesOverlap:` and, when
    /// enabled, `relevantRoles:` features for `entity` under `trigger`.
    ///
    /// Empty unless `trigger` can take arguments and `entity` holds a
    /// non-default role under it.
    pub fn node_level_features(
        &self,
        inst: &SentenceInstance,
        assn: &SentenceAssignment,
        trigger: usize,
        entity: usize,
    ) -> Result<Vec<String>> {
        self.check_sentence(inst, assn)?;
        let label = self.label_at(assn, trigger)?;
        let mention = inst.mention(entity)?;
        if !self.config.is_argumentable(&label) {
            return Ok(Vec::new());
        }
        let Some(roles) = assn.roles_for(trigger) else {
            return Ok(Vec::new());
        };
        let Some(role) = self.argument_role(assn, trigger, entity)? else {
            return Ok(Vec::new());
        };
        let earlier = self.earlier_arguments(inst, roles, entity)?;

        let mut features = Vec::new();
        for other in &earlier {
            if other.role == role {
                features.extend(
                    self.same_role(inst, trigger, mention, other)
                        .into_iter()
                        .map(|f| format!("{}{}", SAME_ROLE, f)),
                );
            }
        }
        for other in &earlier {
            if mention.coreferent_with(other.mention)
                && !self.is_default_role(&other.role)
                && other.role != role
            {
                features.push(format!("{}{}", ONE_ENTITY_TWO_ARGS, label));
            }
        }
        for other in &earlier {
            features.extend(
                self.entity_overlap(mention, &role, other)
                    .into_iter()
                    .map(|f| format!("{}{}", ENTITIES_OVERLAP, f)),
            );
        }
        if self.config.enable_related_roles {
            for other in &earlier {
                if self.config.are_related_roles(&role, &other.role) {
                    let roles = sorted_pair(&role, &other.role);
                    features.extend(
                        self.mention_relations(inst, trigger, mention, other.mention)
                            .into_iter()
                            .map(|f| format!("{}{}#{}", RELEVANT_ROLES, roles, f)),
                    );
                }
            }
        }
        Ok(features)
    }

    /// Candidates before `entity` that have a role in `roles`, nearest first
    fn earlier_arguments<'m>(
        &self,
        inst: &'m SentenceInstance,
        roles: &BTreeMap<usize, usize>,
        entity: usize,
    ) -> Result<Vec<EarlierArgument<'m>>> {
        let mut earlier = Vec::new();
        for (&other, &role) in roles.range(..entity).rev() {
            earlier.push(EarlierArgument {
                mention: inst.mention(other)?,
                role: self.role_label(role)?,
            });
        }
        Ok(earlier)
    }

    fn same_role(
        &self,
        inst: &SentenceInstance,
        trigger: usize,
        mention: &Mention,
        other: &EarlierArgument<'_>,
    ) -> Vec<String> {
        let mut features = Vec::new();
        if mention.coreferent_with(other.mention) {
            features.push(format!("{}#coreference", other.role));
        }
        features.extend(
            self.mention_relations(inst, trigger, mention, other.mention)
                .into_iter()
                .map(|f| format!("{}#{}", other.role, f)),
        );
        features
    }

    /// Surface and syntactic relations between two argument mentions:
    /// extent overlap, the words in a short gap between them, and the
    /// head-to-head dependency path.
    fn mention_relations(
        &self,
        inst: &SentenceInstance,
        trigger: usize,
        mention: &Mention,
        other: &Mention,
    ) -> Vec<String> {
        let mut relations = Vec::new();
        let (extent, other_extent) = (mention.extent(), other.extent());
        if extent.overlaps(&other_extent) {
            relations.push("overlapped".to_string());
        }
        if let Some(gap) = extent.between(&other_extent) {
            if gap.len() < self.config.max_between_gap {
                relations.extend(
                    inst.tokens()[gap]
                        .iter()
                        .map(|token| format!("between:{}", token.text)),
                );
            }
        }
        match path_between(inst, &mention.head_indices(), &other.head_indices()) {
            Some(path) if path.hop_distance() <= self.config.max_path_distance => {
                let rendered =
                    render_path(inst, &path, Some(trigger), &self.config.trigger_word_sentinel);
                relations.push(format!("depPath:{}", rendered));
            }
            _ => {}
        }
        relations
    }

    /// Head/extent containment between mentions of distinct entities, and
    /// the head of an entity falling inside a title mention.
    fn entity_overlap(
        &self,
        mention: &Mention,
        role: &str,
        other: &EarlierArgument<'_>,
    ) -> Vec<String> {
        let mut features = Vec::new();
        if !mention.is_entity() {
            return features;
        }
        if other.mention.is_entity() && !mention.coreferent_with(other.mention) {
            if other.mention.head().within(&mention.extent()) {
                features.push(format!("modifier={}#head={}", other.role, role));
            }
            if mention.head().within(&other.mention.extent()) {
                features.push(format!("tail={}#head={}", other.role, role));
            }
        }
        if other.mention.mention_type() == self.config.title_mention_type
            && mention.head().within(&other.mention.extent())
        {
            features.push(format!(
                "Title={}#{}={}",
                other.role,
                mention.mention_type(),
                role
            ));
        }
        features
    }
}
