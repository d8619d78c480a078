//! Batch auditing of documents.
//!
//! Per document: extract text, run every classifier against that one text
//! snapshot, record the result. An extraction failure becomes a
//! [`FailureNote`] and the batch moves on; nothing else is caught here.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::classify::{classify_keyed, classify_label_set};
use crate::heuristics::{classify_demand_types, detect_data_info, guess_objective};
use crate::locale::Locale;
use crate::record::{AuditEntry, AuditRecord, AuditReport, FailureNote};
use crate::taxonomy::TaxonomySet;

/// Turns a document into one flat, order-preserving text blob.
pub trait TextExtractor {
    type Error: Display;

    fn extract_text(&self, document: &Path) -> Result<String, Self::Error>;
}

/// Display name of a document: its file name.
pub fn document_name(document: &Path) -> String {
    document
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| document.display().to_string())
}

pub struct DocumentAuditor<'a> {
    taxonomies: &'a TaxonomySet,
    locale: Locale,
}

impl<'a> DocumentAuditor<'a> {
    pub fn new(taxonomies: &'a TaxonomySet, locale: Locale) -> Self {
        Self { taxonomies, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Classify one already-extracted text.
    pub fn audit_text(&self, name: &str, text: &str) -> AuditRecord {
        let t = self.taxonomies;
        let data = detect_data_info(text, t);

        AuditRecord {
            name: name.to_string(),
            objective: guess_objective(text, &t.objective_keywords, self.locale),
            data_sources: data.sources,
            granularity: data.granularity,
            preprocessing: classify_keyed(&t.preprocessing, text),
            models: classify_label_set(&t.models, text),
            demand_types: classify_demand_types(text, t),
            validation: classify_keyed(&t.validation, text),
            metrics: classify_label_set(&t.metrics, text),
        }
    }

    /// Audit `documents` in file-name order.
    pub fn audit_batch<E: TextExtractor>(&self, extractor: &E, documents: &[PathBuf]) -> AuditReport {
        let mut ordered: Vec<(String, &PathBuf)> =
            documents.iter().map(|p| (document_name(p), p)).collect();
        ordered.sort();

        let mut report = AuditReport::new();
        for (name, path) in ordered {
            let entry = match extractor.extract_text(path) {
                Ok(text) => {
                    let record = self.audit_text(&name, &text);
                    tracing::debug!(
                        document = %name,
                        models = record.models.len(),
                        metrics = record.metrics.len(),
                        "classified document"
                    );
                    AuditEntry::Recorded(record)
                }
                Err(err) => {
                    tracing::warn!(document = %name, error = %err, "failed to extract document text");
                    AuditEntry::Failed(FailureNote {
                        name,
                        error: err.to_string(),
                    })
                }
            };
            report.push(entry);
        }

        tracing::info!(
            documents = report.len(),
            recorded = report.record_count(),
            failed = report.failure_count(),
            "audit finished"
        );
        report
    }
}
