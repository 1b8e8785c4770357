//! Command-line interface components.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cell-amounts")]
#[command(about = "Parse, total and export currency amounts from locale-formatted table cells")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON configuration file (parser, format and export sections)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse each value and print the number it represents
    Parse(ParseArgs),
    /// Sum one column of a CSV table
    Total(TotalArgs),
    /// Compute a purchase total from quantity and unit price
    Purchase(PurchaseArgs),
    /// Re-export a CSV table with numeric columns normalized
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Values to parse, e.g. "$32,234.00" "€1.234,56"
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct TotalArgs {
    /// CSV file to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Zero-based index of the column to sum
    #[arg(short, long)]
    pub column: usize,

    /// Treat the first row as headers
    #[arg(long)]
    pub has_headers: bool,

    /// CSV field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

#[derive(clap::Args, Debug)]
pub struct PurchaseArgs {
    /// Quantity as typed in the form
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Unit price as typed in the form
    #[arg(long = "unit-price", allow_hyphen_values = true)]
    pub unit_price: String,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// CSV file to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Zero-based indexes of columns to write as numbers
    #[arg(short, long, value_delimiter = ',')]
    pub numeric_columns: Vec<usize>,

    /// Directory for the exported file
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Filename stem, overriding the configured one
    #[arg(long)]
    pub name: Option<String>,

    /// Treat the first row as headers
    #[arg(long)]
    pub has_headers: bool,

    /// CSV field delimiter of the input
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}
