//! Pattern matching primitives.
//!
//! Classification only ever asks two questions of a pattern: does it occur
//! anywhere in the text, and what did its first occurrence capture. Those two
//! questions are the [`PatternMatcher`] trait; [`Pattern`] answers them with the
//! `regex` crate, whose engine runs in linear time (no backtracking blowups on
//! user-supplied taxonomies).

use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::TaxonomyError;

/// Narrow matching capability used by the classifiers.
pub trait PatternMatcher {
    /// True if the pattern occurs anywhere in `text`.
    fn matches(&self, text: &str) -> bool;

    /// Representative text of the first match.
    ///
    /// Capture group 1 when the pattern declares one and it captured some
    /// text, otherwise the whole matched span. `None` when nothing matches or
    /// the span is empty.
    fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str>;
}

/// A compiled, case-insensitive, unanchored regular expression.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` for the taxonomy named `taxonomy` (used in errors only).
    ///
    /// A pattern that matches the empty string would label every document, so
    /// it is rejected like a syntax error.
    pub fn new(taxonomy: &str, source: &str) -> Result<Self, TaxonomyError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|err| TaxonomyError::InvalidPattern {
                taxonomy: taxonomy.to_string(),
                pattern: source.to_string(),
                source: err,
            })?;

        if regex.is_match("") {
            return Err(TaxonomyError::MatchesEmpty {
                taxonomy: taxonomy.to_string(),
                pattern: source.to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern text as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn has_capture_group(&self) -> bool {
        // Group 0 is the implicit whole-match group.
        self.regex.captures_len() > 1
    }
}

impl PatternMatcher for Pattern {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let span = if self.has_capture_group() {
            let caps = self.regex.captures(text)?;
            caps.get(1)
                .filter(|m| !m.is_empty())
                .or_else(|| caps.get(0))
                .map(|m| m.as_str())
        } else {
            self.regex.find(text).map(|m| m.as_str())
        };
        span.filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}
