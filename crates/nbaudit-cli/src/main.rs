//! nbaudit CLI
//!
//! Audits a directory of Jupyter notebooks and reports, per notebook, the
//! models, metrics, preprocessing, validation and demand-type assumptions its
//! text reveals:
//! - `notebook_audit.csv`: one row per readable notebook
//! - `notebook_summary.md`: one section per notebook, unreadable ones included

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use nbaudit_classify::{DocumentAuditor, TaxonomySet};
use nbaudit_ingest::discover_notebooks;

mod config;
mod report;

use config::AuditConfig;

#[derive(Parser)]
#[command(name = "nbaudit")]
#[command(
    author,
    version,
    about = "Infer modeling techniques, metrics and validation strategy from notebooks"
)]
struct Cli {
    #[command(flatten)]
    audit: AuditConfig,

    /// Print the effective taxonomy as JSON and exit.
    #[arg(long)]
    dump_taxonomy: bool,

    /// Print the full report as JSON instead of the preview.
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let taxonomies = cli.audit.load_taxonomies()?;

    if cli.dump_taxonomy {
        println!("{}", taxonomies.config().to_json_pretty()?);
        return Ok(());
    }

    cmd_audit(&cli.audit, &taxonomies, cli.json)
}

fn cmd_audit(config: &AuditConfig, taxonomies: &TaxonomySet, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} {} (*.{})",
            "Auditing".green().bold(),
            config.dir.display(),
            config.ext.trim_start_matches('.')
        );
    }

    let documents = discover_notebooks(&config.dir, &config.ext)
        .with_context(|| format!("listing notebooks in {}", config.dir.display()))?;
    tracing::info!(count = documents.len(), "auditing notebooks");

    let auditor = DocumentAuditor::new(taxonomies, config.locale);
    let report = auditor.audit_batch(&config.extractor(), &documents);

    // Nothing is written until the whole batch has been classified.
    report::write_csv(&report, config.locale, &config.csv)?;
    report::write_markdown(&report, config.locale, &config.markdown)?;

    if json {
        // stdout carries only the JSON document.
        println!("{}", serde_json::to_string_pretty(&report)?);
        report::write_saved_notice(&mut std::io::stderr(), &config.csv, &config.markdown)?;
        return Ok(());
    }

    report::write_saved_notice(&mut std::io::stdout(), &config.csv, &config.markdown)?;

    if report.failure_count() > 0 {
        println!(
            "  {} {} of {} notebooks could not be read (see {})",
            "→".yellow(),
            report.failure_count(),
            report.len(),
            config.markdown.display()
        );
    }

    if report.record_count() > 0 && config.preview > 0 {
        println!("\n{}", "Preview:".bold());
        print!(
            "{}",
            report::render_preview(&report, config.locale, config.preview)
        );
    }

    Ok(())
}
