mod input;

use analytics::{AnalysisEngine, Report, ReportSections};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{Cell, Table};
use configuration::{Config, LoggingSettings};
use core_types::{AnalysisKind, placement_sequence};
use reporter::ReportDocument;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Orthometry dental cast analysis tool.
fn main() -> Result<()> {
    // Optional .env with ORTHOMETRY__* overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => configuration::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from '{}'", path.display()))?,
        None => configuration::load_config().context("Failed to load configuration")?,
    };

    // The guard flushes the file writer on drop, so it lives until main returns.
    let _log_guard = init_logging(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &config),
        Commands::Check(args) => handle_check(args),
        Commands::Points(args) => handle_points(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Space, Bolton and Peck & Peck analyses over digitized dental cast landmarks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file (defaults to ./orthometry.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an analysis over a landmark file and write the report.
    Analyze(AnalyzeArgs),
    /// List the required landmarks a landmark file is missing.
    Check(CheckArgs),
    /// Print the landmark placement sequence for an analysis.
    Points(PointsArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// The analysis to run (superior-space, inferior-space, bolton, peck-and-peck, all).
    #[arg(long)]
    kind: AnalysisKind,

    /// JSON file with the named landmark positions.
    #[arg(long)]
    landmarks: PathBuf,

    /// Where to write the report. Defaults to `<output_dir>/<kind>-<timestamp>.<ext>`.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// A screenshot of the model to reference from the HTML report.
    #[arg(long)]
    screenshot: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

#[derive(Args)]
struct CheckArgs {
    #[arg(long)]
    kind: AnalysisKind,

    #[arg(long)]
    landmarks: PathBuf,
}

#[derive(Args)]
struct PointsArgs {
    #[arg(long)]
    kind: AnalysisKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// A standalone HTML document, plus a summary table on stdout.
    Html,
    /// The report as JSON, on stdout unless `--output` is given.
    Json,
    /// A terminal table only.
    Table,
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid logging.level '{}'", settings.level))?,
    };

    if settings.file_logging_enabled() {
        let appender = tracing_appender::rolling::daily(&settings.directory, "orthometry.log");
        let (file_writer, guard) = tracing_appender::non_blocking(appender);
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stderr.and(file_writer))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Some(guard))
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(None)
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the `analyze` command: load, run, render, write.
fn handle_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let landmarks = input::load_landmarks(&args.landmarks)?;

    let engine = AnalysisEngine::new();
    let outcome = engine
        .run(args.kind, &landmarks)
        .with_context(|| format!("Failed to run {} analysis", args.kind))?;
    let report = outcome.to_report();
    let decimals = config.report.decimals;

    match args.format {
        OutputFormat::Html => {
            let mut doc = ReportDocument::new(&config.report.title, report, decimals);
            if let Some(screenshot) = args.screenshot {
                doc = doc.with_screenshot(screenshot);
            }
            let path = output_path(args.output, &config.report.output_dir, &doc, args.kind, "html");
            reporter::write_html(&doc, &path)?;
            println!("{}", summary_table(&doc.report, decimals));
            println!("Report written to {}", path.display());
        }
        OutputFormat::Json => {
            let doc = ReportDocument::new(&config.report.title, report, decimals);
            match args.output {
                Some(path) => {
                    reporter::write_json(&doc, &path)?;
                    println!("Report written to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&doc)?),
            }
        }
        OutputFormat::Table => println!("{}", summary_table(&report, decimals)),
    }

    Ok(())
}

/// Handles the `check` command. Fails when anything required is missing.
fn handle_check(args: CheckArgs) -> Result<()> {
    let landmarks = input::load_landmarks(&args.landmarks)?;
    let missing = AnalysisEngine::new().missing_landmarks(args.kind, &landmarks);

    if missing.is_empty() {
        println!("All required landmarks for {} analysis are placed.", args.kind);
        return Ok(());
    }

    println!("Missing landmarks for {} analysis:", args.kind);
    for label in &missing {
        println!("  - {label}");
    }
    anyhow::bail!("{} required landmark(s) missing for {} analysis", missing.len(), args.kind)
}

/// Handles the `points` command: the order in which to place landmarks.
fn handle_points(args: PointsArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Landmark", "Required"]);
    for (i, spec) in placement_sequence(args.kind).iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&spec.label),
            Cell::new(if spec.required { "yes" } else { "optional" }),
        ]);
    }
    println!("{}", args.kind.title());
    println!("{table}");
    Ok(())
}

fn output_path(
    explicit: Option<PathBuf>,
    output_dir: &Path,
    doc: &ReportDocument,
    kind: AnalysisKind,
    extension: &str,
) -> PathBuf {
    explicit.unwrap_or_else(|| output_dir.join(doc.default_file_name(kind.slug(), extension)))
}

/// One row per measurement, grouped by section.
fn summary_table(report: &Report, decimals: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Section", "Measurement", "Value"]);
    for section in &report.sections {
        for m in &section.results {
            table.add_row(vec![
                Cell::new(&section.title),
                Cell::new(&m.label),
                Cell::new(m.formatted(decimals)),
            ]);
        }
    }
    table
}
