//! Command implementations for the cell-amounts CLI
//!
//! Each subcommand renders its result to a string first so the output can be
//! checked without capturing stdout.

use crate::cli::{Args, Commands, ExportArgs, ParseArgs, PurchaseArgs, TotalArgs};
use crate::config::AppConfig;
use crate::export::{CsvExport, row_from_cells};
use crate::input::{Table, TableOptions, read_table};
use crate::models::ColumnSummary;
use crate::numeric::{NumericStringParser, format_currency_with, format_numeric_value};
use crate::purchase::PurchaseLine;
use crate::table::summarize_column;
use anyhow::{Context, Result, anyhow, bail};
use colored::*;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cell_amounts={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(&parse_args, &config),
        Some(Commands::Total(total_args)) => run_total(&total_args, &config),
        Some(Commands::Purchase(purchase_args)) => run_purchase(&purchase_args, &config),
        Some(Commands::Export(export_args)) => run_export(&export_args, &config).map(|_| ()),
        None => bail!("No command given; run with --help to list commands"),
    }
}

/// Load the configuration file, or defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

#[derive(Debug, Serialize)]
struct ParsedValue<'a> {
    input: &'a str,
    value: Option<f64>,
}

fn run_parse(args: &ParseArgs, config: &AppConfig) -> Result<()> {
    let parser = NumericStringParser::new(config.parser.clone());
    println!("{}", render_parse_results(&args.values, &parser, args.json)?);
    Ok(())
}

/// One line per value, or a JSON array when `json` is set
pub fn render_parse_results(
    values: &[String],
    parser: &NumericStringParser,
    json: bool,
) -> Result<String> {
    let results: Vec<ParsedValue> = values
        .iter()
        .map(|value| ParsedValue {
            input: value,
            value: parser.parse(value),
        })
        .collect();

    if json {
        return serde_json::to_string_pretty(&results).context("Failed to serialize results");
    }

    let lines: Vec<String> = results
        .iter()
        .map(|result| match result.value {
            Some(number) => format!("{:?} → {}", result.input, number.to_string().green()),
            None => format!("{:?} → {}", result.input, "NaN".red()),
        })
        .collect();
    Ok(lines.join("\n"))
}

fn run_total(args: &TotalArgs, config: &AppConfig) -> Result<()> {
    let table = load_table(args.input.as_deref(), args.has_headers, args.delimiter)?;
    let cells = table
        .column(args.column)
        .with_context(|| format!("Cannot total column {}", args.column))?;

    let parser = NumericStringParser::new(config.parser.clone());
    let summary = summarize_column(&cells, &parser);
    info!(
        "Totalled {} cells in column {}",
        summary.cell_count(),
        args.column
    );

    println!("{}", render_summary(&summary, config));
    Ok(())
}

/// Human-readable column summary
pub fn render_summary(summary: &ColumnSummary, config: &AppConfig) -> String {
    let mut lines = vec![
        format!(
            "{} {}",
            "Total:".bold(),
            format_currency_with(Some(summary.total), &config.format, true).bright_green()
        ),
        format!("{} {}", "Parsed:".bold(), summary.parsed),
    ];

    if summary.unparsable > 0 {
        lines.push(format!(
            "{} {} (counted as {})",
            "Unparsable:".bold(),
            summary.unparsable.to_string().yellow(),
            format_numeric_value(Some(0.0), &config.format)
        ));
    }
    lines.join("\n")
}

fn run_purchase(args: &PurchaseArgs, config: &AppConfig) -> Result<()> {
    let line = PurchaseLine::from_inputs(&args.quantity, &args.unit_price);
    println!("{}", render_purchase(&line, config));
    Ok(())
}

/// One-line purchase total, formatted with the configured decimals
pub fn render_purchase(line: &PurchaseLine, config: &AppConfig) -> String {
    format!(
        "{} × {} = {}",
        line.quantity,
        line.unit_price,
        line.formatted_total_with(&config.format).bright_green()
    )
}

/// Export the input table and return the written path
pub fn run_export(args: &ExportArgs, config: &AppConfig) -> Result<PathBuf> {
    let table = load_table(args.input.as_deref(), args.has_headers, args.delimiter)?;
    let parser = NumericStringParser::new(config.parser.clone());

    let mut export_config = config.export.clone();
    if let Some(name) = &args.name {
        export_config = export_config.with_base_filename(name.clone());
    }

    let mut export = CsvExport::new(export_config);
    if let Some(headers) = &table.headers {
        export = export.with_headers(headers.iter().cloned());
    }
    for row in &table.rows {
        export.push_row(row_from_cells(row, &args.numeric_columns, &parser));
    }

    let path = export
        .write_file(&args.output_dir)
        .with_context(|| format!("Failed to export to {}", args.output_dir.display()))?;

    println!(
        "{} {} rows to {}",
        "Exported".bright_green().bold(),
        export.row_count(),
        path.display()
    );
    Ok(path)
}

fn load_table(input: Option<&Path>, has_headers: bool, delimiter: char) -> Result<Table> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    let options = TableOptions {
        has_headers,
        delimiter: delimiter as u8,
    };

    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };

    let source = input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    read_table(reader, options).with_context(|| format!("Failed to read CSV from {}", source))
}
