//! Presentation vocabulary: sentinels, fallbacks and report labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Labels for the narrative bullet lines.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeLabels {
    pub title: &'static str,
    pub objective: &'static str,
    pub data: &'static str,
    pub granularity: &'static str,
    pub preprocessing: &'static str,
    pub models: &'static str,
    pub demand_types: &'static str,
    pub validation: &'static str,
    pub metrics: &'static str,
    pub error_reading: &'static str,
}

const NARRATIVE_EN: NarrativeLabels = NarrativeLabels {
    title: "Notebook summary",
    objective: "Objective",
    data: "Data",
    granularity: "Granularity",
    preprocessing: "Preprocessing",
    models: "Models",
    demand_types: "Demand types",
    validation: "Validation",
    metrics: "Metrics",
    error_reading: "Error reading",
};

const NARRATIVE_ES: NarrativeLabels = NarrativeLabels {
    title: "Resumen de notebooks",
    objective: "Objetivo",
    data: "Datos",
    granularity: "Granularidad",
    preprocessing: "Preprocesado",
    models: "Modelos",
    demand_types: "Tipos de demanda",
    validation: "Validación",
    metrics: "Métricas",
    error_reading: "Error leyendo",
};

impl Locale {
    /// Sentinel for an empty label category.
    pub fn label_sentinel(self) -> &'static str {
        match self {
            Locale::En => "not detected",
            Locale::Es => "No detectado",
        }
    }

    /// Sentinel for data sources and granularity (grammatically feminine in Spanish).
    pub fn source_sentinel(self) -> &'static str {
        match self {
            Locale::En => "not detected",
            Locale::Es => "No detectada",
        }
    }

    pub fn objective_fallback(self) -> &'static str {
        match self {
            Locale::En => "Exploration / Experiment",
            Locale::Es => "Exploración / Experimento",
        }
    }

    /// Shown when resampling was seen: the period is left for a human to confirm.
    pub fn granularity_prompt(self) -> &'static str {
        match self {
            Locale::En => "Daily/Weekly/Monthly?",
            Locale::Es => "¿Diario/Semanal/Mensual?",
        }
    }

    /// Tabular column headers, in column order.
    pub fn csv_headers(self) -> [&'static str; 9] {
        match self {
            Locale::En => [
                "notebook",
                "objective",
                "data_sources",
                "granularity",
                "preprocessing",
                "models",
                "demand_types",
                "validation",
                "metrics",
            ],
            Locale::Es => [
                "notebook",
                "objetivo",
                "datos_fuente",
                "granularidad",
                "preprocesado",
                "modelos",
                "tipos_demanda",
                "validacion",
                "metricas",
            ],
        }
    }

    pub fn narrative(self) -> &'static NarrativeLabels {
        match self {
            Locale::En => &NARRATIVE_EN,
            Locale::Es => &NARRATIVE_ES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale {0:?} (expected `en` or `es`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" | "español" => Ok(Locale::Es),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
