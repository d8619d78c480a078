//! Report writers: CSV table, Markdown narrative, console preview.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::Path;

use nbaudit_classify::{AuditEntry, AuditReport, Locale, RenderedRecord};

// ============================================================================
// CSV
// ============================================================================

/// Header row plus one row per recorded notebook. Failures are not tabulated.
pub fn render_csv(report: &AuditReport, locale: Locale) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(locale.csv_headers())?;
    for record in report.records() {
        writer.write_record(record.render(locale).columns())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("flushing CSV buffer: {}", err.error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_csv(report: &AuditReport, locale: Locale, out: &Path) -> Result<()> {
    write_output(out, &render_csv(report, locale)?)
}

// ============================================================================
// Markdown
// ============================================================================

/// Title line, then one section per notebook (failures included), in report order.
pub fn render_markdown(report: &AuditReport, locale: Locale) -> String {
    let l = locale.narrative();
    let mut lines = vec![format!("# {}\n", l.title)];

    for entry in report.entries() {
        match entry {
            AuditEntry::Recorded(record) => {
                let row = record.render(locale);
                lines.push(format!("## {}", row.name));
                lines.push(format!("- **{}:** {}", l.objective, row.objective));
                lines.push(format!(
                    "- **{}:** {} · **{}:** {}",
                    l.data, row.data_sources, l.granularity, row.granularity
                ));
                lines.push(format!("- **{}:** {}", l.preprocessing, row.preprocessing));
                lines.push(format!("- **{}:** {}", l.models, row.models));
                lines.push(format!("- **{}:** {}", l.demand_types, row.demand_types));
                lines.push(format!("- **{}:** {}", l.validation, row.validation));
                lines.push(format!("- **{}:** {}", l.metrics, row.metrics));
            }
            AuditEntry::Failed(note) => {
                lines.push(format!("## {}", note.name));
                lines.push(format!("- {}: {}", l.error_reading, note.error));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

pub fn write_markdown(report: &AuditReport, locale: Locale, out: &Path) -> Result<()> {
    write_output(out, &render_markdown(report, locale))
}

/// One `[OK]` line per written artifact.
pub fn write_saved_notice<W: Write>(out: &mut W, csv: &Path, markdown: &Path) -> Result<()> {
    writeln!(out, "{} Saved CSV: {}", "[OK]".green().bold(), csv.display())?;
    writeln!(
        out,
        "{} Saved Markdown: {}",
        "[OK]".green().bold(),
        markdown.display()
    )?;
    Ok(())
}

fn write_output(out: &Path, contents: &str) -> Result<()> {
    fs::create_dir_all(out.parent().unwrap_or(Path::new(".")))
        .with_context(|| format!("creating parent directory of {}", out.display()))?;
    fs::write(out, contents).with_context(|| format!("writing {}", out.display()))
}

// ============================================================================
// Console preview
// ============================================================================

/// Fixed-width table of the first `limit` recorded notebooks.
pub fn render_preview(report: &AuditReport, locale: Locale, limit: usize) -> String {
    let headers = locale.csv_headers();
    let rows: Vec<RenderedRecord> = report
        .records()
        .take(limit)
        .map(|r| r.render(locale))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.columns()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 9]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = format_line(headers);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row.columns()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbaudit_classify::{DocumentAuditor, TaxonomySet, TextExtractor};
    use std::path::PathBuf;

    struct Fixture;

    impl TextExtractor for Fixture {
        type Error = String;

        fn extract_text(&self, document: &Path) -> Result<String, String> {
            match document.file_name().and_then(|n| n.to_str()) {
                Some("broken.ipynb") => Err("bad zip".to_string()),
                Some("empty.ipynb") => Ok(String::new()),
                _ => Ok("# Store demand forecast\n\
                         df = pd.read_csv('sales.csv')\n\
                         df['ds'] = pd.to_datetime(df['ds'])\n\
                         m = ARIMA(df).fit()\n\
                         print(MAPE(y, yhat))"
                    .to_string()),
            }
        }
    }

    fn report(locale: Locale) -> AuditReport {
        let taxonomies = TaxonomySet::builtin().unwrap();
        let docs = vec![
            PathBuf::from("empty.ipynb"),
            PathBuf::from("broken.ipynb"),
            PathBuf::from("arima.ipynb"),
        ];
        DocumentAuditor::new(&taxonomies, locale).audit_batch(&Fixture, &docs)
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let csv = render_csv(&report(Locale::En), Locale::En).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 9);
        assert_eq!(&headers[0], "notebook");
        assert_eq!(&headers[5], "models");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "arima.ipynb");
        assert_eq!(&rows[0][1], "Store demand forecast");
        assert_eq!(&rows[0][2], "CSV");
        assert_eq!(&rows[0][4], "datetime_parsing");
        assert_eq!(&rows[0][5], "ARIMA");
        assert_eq!(&rows[0][8], "MAPE");
        assert_eq!(&rows[1][0], "empty.ipynb");
        assert_eq!(&rows[1][5], "not detected");
        assert!(!csv.contains("broken.ipynb"));
    }

    #[test]
    fn empty_report_writes_only_the_header() {
        let csv = render_csv(&AuditReport::new(), Locale::Es).unwrap();
        assert_eq!(
            csv,
            "notebook,objetivo,datos_fuente,granularidad,preprocesado,modelos,tipos_demanda,validacion,metricas\n"
        );
    }

    #[test]
    fn markdown_has_one_section_per_document_including_failures() {
        let md = render_markdown(&report(Locale::En), Locale::En);

        assert!(md.starts_with("# Notebook summary\n\n## arima.ipynb\n"));
        assert_eq!(md.matches("\n## ").count(), 3);
        assert!(md.contains("## broken.ipynb\n- Error reading: bad zip\n"));
        assert!(md.contains("- **Data:** CSV · **Granularity:** not detected"));
        assert!(md.contains("- **Objective:** Exploration / Experiment"));
    }

    #[test]
    fn markdown_follows_locale() {
        let md = render_markdown(&report(Locale::Es), Locale::Es);
        assert!(md.starts_with("# Resumen de notebooks\n"));
        assert!(md.contains("- Error leyendo: bad zip"));
        assert!(md.contains("- **Modelos:** No detectado"));
    }

    #[test]
    fn writers_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports").join("audit.md");
        write_markdown(&report(Locale::En), Locale::En, &out).unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("## empty.ipynb"));
    }

    #[test]
    fn saved_notice_names_both_artifacts() {
        let mut out = Vec::new();
        write_saved_notice(
            &mut out,
            Path::new("out/audit.csv"),
            Path::new("out/summary.md"),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Saved CSV: out/audit.csv"));
        assert!(lines[1].ends_with("Saved Markdown: out/summary.md"));
    }

    #[test]
    fn preview_is_limited_and_aligned() {
        let preview = render_preview(&report(Locale::En), Locale::En, 1);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("notebook     objective"));
        assert!(lines[1].starts_with("arima.ipynb  Store demand forecast"));
    }
}
