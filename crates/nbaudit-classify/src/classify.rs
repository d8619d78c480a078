//! Taxonomy classification.
//!
//! Both classifiers share one loop: walk the taxonomy, keep what matched,
//! return a [`LabelSet`]. Results are always sorted (byte order) and
//! deduplicated, whatever order the taxonomy declares its entries in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::matcher::PatternMatcher;
use crate::taxonomy::KeyedTaxonomy;

/// Sorted, deduplicated labels detected for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeSet<String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Join labels with `", "`, or return `sentinel` when empty.
    pub fn render(&self, sentinel: &str) -> String {
        if self.0.is_empty() {
            return sentinel.to_string();
        }
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl FromIterator<String> for LabelSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Classify `text` against a label-set taxonomy.
///
/// Each matching pattern contributes its first capture; coinciding captures
/// from different patterns collapse into one label.
pub fn classify_label_set<M: PatternMatcher>(patterns: &[M], text: &str) -> LabelSet {
    let mut found = LabelSet::new();
    for pattern in patterns {
        if let Some(label) = pattern.first_capture(text) {
            found.insert(label);
        }
    }
    found
}

/// Classify `text` against a keyed taxonomy: every key whose pattern matches.
pub fn classify_keyed<M: PatternMatcher>(taxonomy: &KeyedTaxonomy<M>, text: &str) -> LabelSet {
    let mut hits = LabelSet::new();
    for (key, pattern) in taxonomy.iter() {
        if pattern.matches(text) {
            hits.insert(key);
        }
    }
    hits
}
