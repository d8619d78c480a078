//! Jupyter notebook text extraction.
//!
//! Reads the `.ipynb` JSON container and flattens its code and markdown cells,
//! in order, into one text blob (cells joined by a newline). Output cells and
//! raw cells are ignored.
//!
//! Supports nbformat 4 (top-level `cells`) and nbformat 3 (`worksheets[].cells`,
//! code under `input`, `heading` cells treated as markdown).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use nbaudit_classify::TextExtractor;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a valid notebook: {0}")]
    Json(#[from] serde_json::Error),
    #[error("notebook has no `nbformat` version")]
    MissingFormat,
    #[error("unsupported nbformat {0} (expected 3 or 4)")]
    UnsupportedFormat(u64),
    #[error("{path} is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

// ============================================================================
// Container schema (only the parts we read)
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawNotebook {
    nbformat: Option<u64>,
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    worksheets: Vec<RawWorksheet>,
}

#[derive(Debug, Deserialize)]
struct RawWorksheet {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: Option<MultilineText>,
    /// nbformat 3 keeps code cell text here.
    #[serde(default)]
    input: Option<MultilineText>,
}

/// Notebook text fields are either one string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

impl MultilineText {
    fn into_text(self) -> String {
        match self {
            MultilineText::Single(s) => s,
            // Lines already carry their own trailing newlines.
            MultilineText::Lines(lines) => lines.concat(),
        }
    }
}

impl RawCell {
    /// Text of a code or markdown cell; `None` for every other cell type.
    fn into_text(self, nbformat: u64) -> Option<String> {
        let text = match (nbformat, self.cell_type.as_str()) {
            (4, "code" | "markdown") | (3, "markdown" | "heading") => self.source,
            (3, "code") => self.input,
            _ => return None,
        };
        Some(text.map(MultilineText::into_text).unwrap_or_default())
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Flatten notebook JSON into its code + markdown text.
pub fn extract_notebook_text_from_str(json: &str) -> Result<String, ExtractError> {
    let notebook: RawNotebook = serde_json::from_str(json)?;
    let nbformat = notebook.nbformat.ok_or(ExtractError::MissingFormat)?;

    let cells: Vec<RawCell> = match nbformat {
        4 => notebook.cells,
        3 => notebook
            .worksheets
            .into_iter()
            .flat_map(|ws| ws.cells)
            .collect(),
        other => return Err(ExtractError::UnsupportedFormat(other)),
    };

    let texts: Vec<String> = cells
        .into_iter()
        .filter_map(|cell| cell.into_text(nbformat))
        .collect();
    Ok(texts.join("\n"))
}

/// File-backed notebook extractor.
#[derive(Debug, Clone)]
pub struct NotebookExtractor {
    /// Notebooks larger than this (bytes) are refused.
    pub max_bytes: u64,
}

impl Default for NotebookExtractor {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024 * 1024,
        }
    }
}

impl NotebookExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let io_err = |source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_bytes {
            return Err(ExtractError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_bytes,
            });
        }

        let json = std::fs::read_to_string(path).map_err(io_err)?;
        extract_notebook_text_from_str(&json)
    }
}

impl TextExtractor for NotebookExtractor {
    type Error = ExtractError;

    fn extract_text(&self, document: &Path) -> Result<String, ExtractError> {
        self.extract(document)
    }
}
