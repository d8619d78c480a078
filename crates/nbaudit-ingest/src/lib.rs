//! Notebook ingestion for nbaudit.
//!
//! - [`discover_notebooks`]: the notebooks of one directory, in name order
//! - [`NotebookExtractor`]: `.ipynb` → flat text, the auditor's [`TextExtractor`](nbaudit_classify::TextExtractor)
//!
//! This crate owns all container parsing; classification never sees JSON.

pub mod discovery;
pub mod notebook;

pub use discovery::{discover_notebooks, DiscoveryError};
pub use notebook::{extract_notebook_text_from_str, ExtractError, NotebookExtractor};
