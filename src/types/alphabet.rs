//! Growth-only label dictionaries shared across sentences.
//!
//! An index, once handed out, always maps back to the same label. Insertion
//! takes the write lock and re-checks, so concurrent workers that race on the
//! same new label agree on its index.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{FeatureError, Result};

#[derive(Debug, Default)]
struct AlphabetInner {
    id_to_label: Vec<Arc<str>>,
    label_to_id: HashMap<Arc<str>, usize>,
}

/// Bidirectional label <-> index mapping, append-only.
#[derive(Debug)]
pub struct Alphabet {
    name: &'static str,
    inner: RwLock<AlphabetInner>,
}

impl Alphabet {
    pub fn new(name: &'static str) -> Self {
        Self { name, inner: RwLock::new(AlphabetInner::default()) }
    }

    /// Index of `label`, inserting it if absent
    pub fn get_or_insert(&self, label: &str) -> usize {
        if let Some(index) = self.lookup_index(label) {
            return index;
        }
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&index) = inner.label_to_id.get(label) {
            return index;
        }
        let index = inner.id_to_label.len();
        let label: Arc<str> = Arc::from(label);
        inner.id_to_label.push(Arc::clone(&label));
        inner.label_to_id.insert(label, index);
        log::trace!("{} alphabet: '{}' -> {}", self.name, inner.id_to_label[index], index);
        index
    }

    pub fn lookup_index(&self, label: &str) -> Option<usize> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.label_to_id.get(label).copied()
    }

    pub fn lookup_label(&self, index: usize) -> Option<Arc<str>> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.id_to_label.get(index).cloned()
    }

    /// Like [`Alphabet::lookup_label`], but an unknown index is an error
    pub fn label(&self, index: usize) -> Result<Arc<str>> {
        self.lookup_label(index)
            .ok_or(FeatureError::UnknownLabelIndex { alphabet: self.name, index })
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).id_to_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The two alphabets a sentence assignment is expressed in
#[derive(Debug)]
pub struct Alphabets {
    pub triggers: Alphabet,
    pub roles: Alphabet,
}

impl Alphabets {
    pub fn new() -> Self {
        Self {
            triggers: Alphabet::new("trigger"),
            roles: Alphabet::new("role"),
        }
    }
}

impl Default for Alphabets {
    fn default() -> Self {
        Self::new()
    }
}
