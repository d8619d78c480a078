//! Taxonomy configuration.
//!
//! Taxonomies are plain data: a JSON document of pattern lists and
//! key → pattern maps ([`TaxonomyConfig`]). It is compiled once into a
//! [`TaxonomySet`], which is read-only afterwards and handed explicitly to
//! whatever classifies text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::matcher::Pattern;
use crate::TaxonomyError;

/// Built-in taxonomy, used when no taxonomy file is given.
pub const DEFAULT_TAXONOMY_JSON: &str = include_str!("../taxonomies/default.json");

// ============================================================================
// Keyed taxonomy
// ============================================================================

/// Category key → pattern. The key is the label, whatever the pattern matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTaxonomy<M = Pattern> {
    entries: Vec<(String, M)>,
}

impl<M> KeyedTaxonomy<M> {
    pub fn from_entries(entries: Vec<(String, M)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &M)> {
        self.entries.iter().map(|(k, m)| (k, m))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Raw configuration
// ============================================================================

/// Uncompiled taxonomy configuration, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyConfig {
    /// Label-set taxonomy: modeling techniques.
    pub models: Vec<String>,
    /// Label-set taxonomy: evaluation metrics.
    pub metrics: Vec<String>,
    pub preprocessing: BTreeMap<String, String>,
    pub validation: BTreeMap<String, String>,
    pub demand_types: BTreeMap<String, String>,
    /// Source format name → read indicator.
    pub data_sources: BTreeMap<String, String>,
    /// Any resampling / frequency-conversion indicator.
    pub resampling: String,
    /// Substrings that make a line count as an objective statement.
    #[serde(default = "default_objective_keywords")]
    pub objective_keywords: Vec<String>,
}

fn default_objective_keywords() -> Vec<String> {
    vec![
        "Objective".to_string(),
        "Objetivo".to_string(),
        "Goal".to_string(),
    ]
}

impl TaxonomyConfig {
    /// The built-in configuration.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_json_str(DEFAULT_TAXONOMY_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, TaxonomyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Compiled taxonomies
// ============================================================================

/// Every taxonomy the auditor applies, compiled and ready to match.
#[derive(Debug, Clone)]
pub struct TaxonomySet {
    pub models: Vec<Pattern>,
    pub metrics: Vec<Pattern>,
    pub preprocessing: KeyedTaxonomy,
    pub validation: KeyedTaxonomy,
    pub demand_types: KeyedTaxonomy,
    pub data_sources: KeyedTaxonomy,
    pub resampling: Pattern,
    pub objective_keywords: Vec<String>,
    config: TaxonomyConfig,
}

impl TaxonomySet {
    /// Compile the built-in taxonomy.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::compile(TaxonomyConfig::builtin()?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TaxonomyError> {
        Self::compile(TaxonomyConfig::from_json_file(path)?)
    }

    /// Compile every pattern; the first invalid one fails the whole set.
    pub fn compile(config: TaxonomyConfig) -> Result<Self, TaxonomyError> {
        let models = compile_list("models", &config.models)?;
        let metrics = compile_list("metrics", &config.metrics)?;
        let preprocessing = compile_keyed("preprocessing", &config.preprocessing)?;
        let validation = compile_keyed("validation", &config.validation)?;
        let demand_types = compile_keyed("demand_types", &config.demand_types)?;
        let data_sources = compile_keyed("data_sources", &config.data_sources)?;
        let resampling = Pattern::new("resampling", &config.resampling)?;

        Ok(Self {
            models,
            metrics,
            preprocessing,
            validation,
            demand_types,
            data_sources,
            resampling,
            objective_keywords: config.objective_keywords.clone(),
            config,
        })
    }

    /// The configuration this set was compiled from.
    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }
}

fn compile_list(name: &str, sources: &[String]) -> Result<Vec<Pattern>, TaxonomyError> {
    sources.iter().map(|s| Pattern::new(name, s)).collect()
}

fn compile_keyed(
    name: &str,
    raw: &BTreeMap<String, String>,
) -> Result<KeyedTaxonomy, TaxonomyError> {
    let entries = raw
        .iter()
        .map(|(key, source)| Pattern::new(name, source).map(|p| (key.clone(), p)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(KeyedTaxonomy::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_compiles() {
        let set = TaxonomySet::builtin().unwrap();
        assert_eq!(set.models.len(), 19);
        assert_eq!(set.metrics.len(), 9);
        assert_eq!(
            set.demand_types.keys().collect::<Vec<_>>(),
            vec!["continuous", "intermittent"]
        );
        assert_eq!(
            set.validation.keys().collect::<Vec<_>>(),
            vec!["backtesting", "cv", "horizon"]
        );
        assert_eq!(set.data_sources.len(), 4);
        assert_eq!(set.objective_keywords, default_objective_keywords());
    }

    #[test]
    fn objective_keywords_default_when_omitted() {
        let json = r#"{
            "models": [], "metrics": [],
            "preprocessing": {}, "validation": {}, "demand_types": {}, "data_sources": {},
            "resampling": "resample"
        }"#;
        let config = TaxonomyConfig::from_json_str(json).unwrap();
        assert_eq!(config.objective_keywords.len(), 3);
    }

    #[test]
    fn invalid_pattern_fails_the_whole_set() {
        let mut config = TaxonomyConfig::builtin().unwrap();
        config
            .validation
            .insert("broken".to_string(), "TimeSeriesSplit(".to_string());
        let err = TaxonomySet::compile(config).unwrap_err();
        assert!(matches!(
            err,
            TaxonomyError::InvalidPattern { ref taxonomy, .. } if taxonomy == "validation"
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = DEFAULT_TAXONOMY_JSON.replacen("\"models\"", "\"modles\"", 1);
        assert!(matches!(
            TaxonomyConfig::from_json_str(&json),
            Err(TaxonomyError::Json(_))
        ));
    }

    #[test]
    fn config_survives_json_dump() {
        let config = TaxonomyConfig::builtin().unwrap();
        let dumped = config.to_json_pretty().unwrap();
        assert_eq!(TaxonomyConfig::from_json_str(&dumped).unwrap(), config);
    }
}
