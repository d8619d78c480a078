//! Errors raised while loading taxonomy configuration.
//!
//! Any of these means every document's classification would be compromised,
//! so callers propagate them instead of recovering per document.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("invalid pattern {pattern:?} in taxonomy `{taxonomy}`: {source}")]
    InvalidPattern {
        taxonomy: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("pattern {pattern:?} in taxonomy `{taxonomy}` matches empty text")]
    MatchesEmpty { taxonomy: String, pattern: String },
    #[error("malformed taxonomy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
