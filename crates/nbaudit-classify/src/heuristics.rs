//! Heuristic extractors layered over the matcher and classifiers.

use crate::classify::{classify_keyed, LabelSet};
use crate::locale::Locale;
use crate::matcher::PatternMatcher;
use crate::record::{DataInfo, GranularityHint};
use crate::taxonomy::TaxonomySet;

/// Lines this short (in characters) never count as an objective.
pub const MIN_OBJECTIVE_CHARS: usize = 8;
/// Objectives are cut to this many characters.
pub const MAX_OBJECTIVE_CHARS: usize = 120;

/// First heading-like line of `text`, cleaned up, or the locale's fallback.
///
/// A line qualifies when it is longer than [`MIN_OBJECTIVE_CHARS`] and either
/// starts with `#` (after indentation) or contains one of `keywords`. The first
/// qualifying line wins even if a later one reads better.
pub fn guess_objective(text: &str, keywords: &[String], locale: Locale) -> String {
    text.lines()
        .filter(|line| line.chars().count() > MIN_OBJECTIVE_CHARS)
        .filter(|line| is_heading_like(line, keywords))
        .map(clean_heading)
        .find(|objective| !objective.is_empty())
        .unwrap_or_else(|| locale.objective_fallback().to_string())
}

fn is_heading_like(line: &str, keywords: &[String]) -> bool {
    line.trim_start().starts_with('#') || keywords.iter().any(|k| line.contains(k.as_str()))
}

fn clean_heading(line: &str) -> String {
    line.trim_matches(|c: char| c == '#' || c == ' ')
        .trim()
        .chars()
        .take(MAX_OBJECTIVE_CHARS)
        .collect()
}

/// Source formats the text reads from, plus the coarse granularity hint.
///
/// Formats are not exclusive; every one that matched is reported.
pub fn detect_data_info(text: &str, taxonomies: &TaxonomySet) -> DataInfo {
    let sources = classify_keyed(&taxonomies.data_sources, text);
    let granularity = if taxonomies.resampling.matches(text) {
        GranularityHint::AskUser
    } else {
        GranularityHint::NotDetected
    };

    DataInfo {
        sources,
        granularity,
    }
}

/// Demand types (`intermittent`, `continuous`) implied by the text. Both may apply.
pub fn classify_demand_types(text: &str, taxonomies: &TaxonomySet) -> LabelSet {
    classify_keyed(&taxonomies.demand_types, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["Objective".to_string(), "Goal".to_string()]
    }

    #[test]
    fn first_markdown_heading_wins() {
        let text = "import pandas as pd\n# Demand forecast for stores\n## A better heading line";
        assert_eq!(
            guess_objective(text, &keywords(), Locale::En),
            "Demand forecast for stores"
        );
    }

    #[test]
    fn keyword_lines_qualify_without_heading_marker() {
        let text = "x = 1\nGoal: reduce stockouts by 10%";
        assert_eq!(
            guess_objective(text, &keywords(), Locale::En),
            "Goal: reduce stockouts by 10%"
        );
    }

    #[test]
    fn short_headings_are_skipped() {
        let text = "# Intro\n# Weekly sales model";
        assert_eq!(guess_objective(text, &keywords(), Locale::En), "Weekly sales model");
    }

    #[test]
    fn marker_only_lines_are_skipped() {
        let text = "##########\n# Real title here";
        assert_eq!(guess_objective(text, &keywords(), Locale::En), "Real title here");
    }

    #[test]
    fn objective_is_truncated() {
        let text = format!("# {}", "é".repeat(300));
        let objective = guess_objective(&text, &keywords(), Locale::En);
        assert_eq!(objective.chars().count(), MAX_OBJECTIVE_CHARS);
    }

    #[test]
    fn falls_back_when_nothing_is_heading_like() {
        let text = "df = pd.read_csv('x.csv')\nmodel.fit(df)";
        assert_eq!(
            guess_objective(text, &keywords(), Locale::En),
            "Exploration / Experiment"
        );
        assert_eq!(
            guess_objective("", &keywords(), Locale::Es),
            "Exploración / Experimento"
        );
    }

    #[test]
    fn data_sources_accumulate_and_granularity_is_binary() {
        let taxonomies = TaxonomySet::builtin().unwrap();
        let info = detect_data_info(
            "a = pd.read_csv('a.csv')\nb = pd.read_parquet('b.parquet')\na.resample('W')",
            &taxonomies,
        );
        assert_eq!(info.sources.iter().collect::<Vec<_>>(), vec!["CSV", "Parquet"]);
        assert_eq!(info.granularity, GranularityHint::AskUser);

        let none = detect_data_info("print('hello')", &taxonomies);
        assert!(none.sources.is_empty());
        assert_eq!(none.granularity, GranularityHint::NotDetected);
    }

    #[test]
    fn croston_on_sparse_series_is_intermittent_only() {
        let taxonomies = TaxonomySet::builtin().unwrap();
        let types = classify_demand_types("Croston forecast for sparse intermittent series", &taxonomies);
        assert!(types.contains("intermittent"));
        assert!(!types.contains("continuous"));
    }

    #[test]
    fn demand_types_are_not_exclusive() {
        let taxonomies = TaxonomySet::builtin().unwrap();
        let types = classify_demand_types("compare Croston against LightGBM", &taxonomies);
        assert_eq!(types.iter().collect::<Vec<_>>(), vec!["continuous", "intermittent"]);
    }
}
