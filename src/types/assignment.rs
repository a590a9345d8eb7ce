//! Candidate joint labeling of one sentence.

use std::collections::BTreeMap;

use crate::error::{FeatureError, Result};
use crate::types::Alphabets;

/// Trigger label per token plus, for every trigger, the roles assigned to
/// entity candidates.
///
/// Labels and roles are stored as alphabet indices. An entity missing from a
/// trigger's role map has not been decided yet for that trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceAssignment {
    node_labels: Vec<usize>,
    edges: BTreeMap<usize, BTreeMap<usize, usize>>,
    default_trigger: usize,
}

impl SentenceAssignment {
    /// All tokens labelled with `default_trigger`, no arguments.
    pub fn new(token_count: usize, default_trigger: usize) -> Self {
        Self {
            node_labels: vec![default_trigger; token_count],
            edges: BTreeMap::new(),
            default_trigger,
        }
    }

    /// Empty assignment, interning the default trigger label.
    pub fn empty(token_count: usize, alphabets: &Alphabets, default_trigger_label: &str) -> Self {
        Self::new(token_count, alphabets.triggers.get_or_insert(default_trigger_label))
    }

    pub fn token_count(&self) -> usize {
        self.node_labels.len()
    }

    pub fn default_trigger(&self) -> usize {
        self.default_trigger
    }

    fn check_token(&self, index: usize) -> Result<()> {
        if index >= self.node_labels.len() {
            return Err(FeatureError::TokenOutOfRange { index, len: self.node_labels.len() });
        }
        Ok(())
    }

    /// Trigger label index at `index`
    pub fn label_index_at(&self, index: usize) -> Result<usize> {
        self.check_token(index)?;
        Ok(self.node_labels[index])
    }

    pub fn is_trigger(&self, index: usize) -> bool {
        self.node_labels.get(index).is_some_and(|&label| label != self.default_trigger)
    }

    /// Token indices bearing a non-default label, ascending
    pub fn triggers(&self) -> impl Iterator<Item = usize> + '_ {
        self.node_labels
            .iter()
            .enumerate()
            .filter(move |&(_, &label)| label != self.default_trigger)
            .map(|(index, _)| index)
    }

    /// Set the trigger label of a token. Resetting a token to the default
    /// label drops its role map.
    pub fn set_trigger(&mut self, index: usize, label: usize) -> Result<()> {
        self.check_token(index)?;
        self.node_labels[index] = label;
        if label == self.default_trigger {
            self.edges.remove(&index);
        }
        Ok(())
    }

    /// Assign `role` to entity candidate `entity` under trigger `trigger`.
    pub fn set_role(&mut self, trigger: usize, entity: usize, role: usize) -> Result<()> {
        self.check_token(trigger)?;
        if !self.is_trigger(trigger) {
            return Err(FeatureError::AssignmentInvariant(format!(
                "token {} has the default label and cannot take arguments",
                trigger
            )));
        }
        self.edges.entry(trigger).or_default().insert(entity, role);
        Ok(())
    }

    /// Role map of a trigger, `None` if nothing has been assigned under it
    pub fn roles_for(&self, trigger: usize) -> Option<&BTreeMap<usize, usize>> {
        self.edges.get(&trigger)
    }

    /// Role of `entity` under `trigger`, if decided
    pub fn role_of(&self, trigger: usize, entity: usize) -> Option<usize> {
        self.edges.get(&trigger)?.get(&entity).copied()
    }

    /// String form of [`SentenceAssignment::set_trigger`]
    pub fn assign_trigger(&mut self, alphabets: &Alphabets, index: usize, label: &str) -> Result<()> {
        let label = alphabets.triggers.get_or_insert(label);
        self.set_trigger(index, label)
    }

    /// String form of [`SentenceAssignment::set_role`]
    pub fn assign_role(
        &mut self,
        alphabets: &Alphabets,
        trigger: usize,
        entity: usize,
        role: &str,
    ) -> Result<()> {
        let role = alphabets.roles.get_or_insert(role);
        self.set_role(trigger, entity, role)
    }
}
