//! Audit results: one entry per document, in processing order.

use serde::{Deserialize, Serialize};

use crate::classify::LabelSet;
use crate::locale::Locale;

/// Coarse granularity signal. Never an actual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GranularityHint {
    /// Resampling was seen; the period is left for a human to confirm.
    AskUser,
    NotDetected,
}

impl GranularityHint {
    pub fn render(self, locale: Locale) -> &'static str {
        match self {
            GranularityHint::AskUser => locale.granularity_prompt(),
            GranularityHint::NotDetected => locale.source_sentinel(),
        }
    }
}

/// Data-source formats and granularity hint for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataInfo {
    pub sources: LabelSet,
    pub granularity: GranularityHint,
}

/// Classification summary of one successfully extracted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub name: String,
    pub objective: String,
    pub data_sources: LabelSet,
    pub granularity: GranularityHint,
    pub preprocessing: LabelSet,
    pub models: LabelSet,
    pub demand_types: LabelSet,
    pub validation: LabelSet,
    pub metrics: LabelSet,
}

/// An [`AuditRecord`] with every field rendered for output.
///
/// Multi-value fields are `", "`-joined, or the locale's sentinel when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRecord {
    pub name: String,
    pub objective: String,
    pub data_sources: String,
    pub granularity: String,
    pub preprocessing: String,
    pub models: String,
    pub demand_types: String,
    pub validation: String,
    pub metrics: String,
}

impl RenderedRecord {
    /// Fields in tabular column order.
    pub fn columns(&self) -> [&str; 9] {
        [
            &self.name,
            &self.objective,
            &self.data_sources,
            &self.granularity,
            &self.preprocessing,
            &self.models,
            &self.demand_types,
            &self.validation,
            &self.metrics,
        ]
    }
}

impl AuditRecord {
    pub fn render(&self, locale: Locale) -> RenderedRecord {
        let labels = locale.label_sentinel();
        RenderedRecord {
            name: self.name.clone(),
            objective: self.objective.clone(),
            data_sources: self.data_sources.render(locale.source_sentinel()),
            granularity: self.granularity.render(locale).to_string(),
            preprocessing: self.preprocessing.render(labels),
            models: self.models.render(labels),
            demand_types: self.demand_types.render(labels),
            validation: self.validation.render(labels),
            metrics: self.metrics.render(labels),
        }
    }
}

/// A document whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureNote {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditEntry {
    Recorded(AuditRecord),
    Failed(FailureNote),
}

impl AuditEntry {
    pub fn name(&self) -> &str {
        match self {
            AuditEntry::Recorded(record) => &record.name,
            AuditEntry::Failed(note) => &note.name,
        }
    }
}

/// Results of one batch run.
///
/// The tabular view ([`AuditReport::records`]) holds successful documents only;
/// the narrative view ([`AuditReport::entries`]) holds every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &AuditRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            AuditEntry::Recorded(record) => Some(record),
            AuditEntry::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FailureNote> {
        self.entries.iter().filter_map(|entry| match entry {
            AuditEntry::Failed(note) => Some(note),
            AuditEntry::Recorded(_) => None,
        })
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<AuditEntry> for AuditReport {
    fn from_iter<I: IntoIterator<Item = AuditEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AuditRecord {
        AuditRecord {
            name: "a.ipynb".to_string(),
            objective: "Forecast demand".to_string(),
            data_sources: ["Parquet", "CSV"].into_iter().collect(),
            granularity: GranularityHint::NotDetected,
            preprocessing: LabelSet::new(),
            models: ["ARIMA"].into_iter().collect(),
            demand_types: LabelSet::new(),
            validation: LabelSet::new(),
            metrics: ["MAPE", "MAE"].into_iter().collect(),
        }
    }

    #[test]
    fn empty_categories_render_as_sentinel() {
        let row = record().render(Locale::En);
        assert_eq!(row.preprocessing, "not detected");
        assert_eq!(row.validation, "not detected");
        assert_eq!(row.granularity, "not detected");
        assert_eq!(row.models, "ARIMA");
        assert_eq!(row.metrics, "MAE, MAPE");
        assert_eq!(row.data_sources, "CSV, Parquet");
    }

    #[test]
    fn spanish_rendering_uses_feminine_sentinel_for_sources() {
        let mut rec = record();
        rec.data_sources = LabelSet::new();
        rec.granularity = GranularityHint::AskUser;
        let row = rec.render(Locale::Es);
        assert_eq!(row.data_sources, "No detectada");
        assert_eq!(row.granularity, "¿Diario/Semanal/Mensual?");
        assert_eq!(row.demand_types, "No detectado");
    }

    #[test]
    fn report_views_split_records_and_failures() {
        let report: AuditReport = vec![
            AuditEntry::Recorded(record()),
            AuditEntry::Failed(FailureNote {
                name: "b.ipynb".to_string(),
                error: "bad zip".to_string(),
            }),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 2);
        assert_eq!(report.record_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.entries()[1].name(), "b.ipynb");
    }

    #[test]
    fn entries_serialize_with_status_tag() {
        let entry = AuditEntry::Failed(FailureNote {
            name: "b.ipynb".to_string(),
            error: "bad zip".to_string(),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "bad zip");
    }
}
