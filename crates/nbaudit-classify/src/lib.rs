//! Lexical classification of analytical notebooks.
//!
//! Infers, from free-form text only:
//! - modeling techniques and metrics (label-set taxonomies: the matched text is the label)
//! - preprocessing, validation, demand types, data sources (keyed taxonomies: the key is the label)
//! - an objective line and a coarse granularity hint (heuristics)
//!
//! Taxonomies are declarative JSON compiled once into a [`TaxonomySet`].
//! Every multi-valued result is a sorted [`LabelSet`], so identical input
//! always renders identically.

pub mod audit;
pub mod classify;
pub mod error;
pub mod heuristics;
pub mod locale;
pub mod matcher;
pub mod record;
pub mod taxonomy;

pub use audit::*;
pub use classify::*;
pub use error::*;
pub use heuristics::*;
pub use locale::*;
pub use matcher::*;
pub use record::*;
pub use taxonomy::*;
