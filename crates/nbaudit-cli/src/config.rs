//! Run configuration.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use nbaudit_classify::{Locale, TaxonomySet};
use nbaudit_ingest::NotebookExtractor;

pub const DEFAULT_NOTEBOOK_DIR: &str = "notebooks";
pub const DEFAULT_CSV_OUT: &str = "notebook_audit.csv";
pub const DEFAULT_MARKDOWN_OUT: &str = "notebook_summary.md";

#[derive(Args, Debug, Clone)]
pub struct AuditConfig {
    /// Directory holding the notebooks to audit (not searched recursively).
    #[arg(long, env = "NBAUDIT_NOTEBOOK_DIR", default_value = DEFAULT_NOTEBOOK_DIR)]
    pub dir: PathBuf,

    /// Notebook file extension.
    #[arg(long, default_value = "ipynb")]
    pub ext: String,

    /// Tabular output (one row per readable notebook).
    #[arg(long, default_value = DEFAULT_CSV_OUT)]
    pub csv: PathBuf,

    /// Narrative output (one section per notebook, failures included).
    #[arg(long, default_value = DEFAULT_MARKDOWN_OUT)]
    pub markdown: PathBuf,

    /// JSON taxonomy file replacing the built-in patterns.
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Output language for sentinels, fallbacks and headings (en|es).
    #[arg(long, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Rows shown in the console preview.
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Notebooks larger than this many bytes are reported as unreadable.
    #[arg(long)]
    pub max_notebook_bytes: Option<u64>,
}

impl AuditConfig {
    /// Compile the taxonomy in effect for this run.
    pub fn load_taxonomies(&self) -> Result<TaxonomySet> {
        match &self.taxonomy {
            Some(path) => TaxonomySet::from_json_file(path)
                .with_context(|| format!("loading taxonomy {}", path.display())),
            None => TaxonomySet::builtin().context("compiling built-in taxonomy"),
        }
    }

    pub fn extractor(&self) -> NotebookExtractor {
        let extractor = NotebookExtractor::new();
        match self.max_notebook_bytes {
            Some(limit) => extractor.with_max_bytes(limit),
            None => extractor,
        }
    }
}
