//! Cell Amounts Library
//!
//! Recovers numeric values from the text of rendered accounting table cells,
//! where amounts may be written in US (`1,234.56`), European (`1.234,56`),
//! space-grouped (`32 234.00`) or currency-prefixed (`$`, `€`, `MXN`) form.
//!
//! This library provides tools for:
//! - Parsing locale-ambiguous numeric strings into `f64`, with `None` for unusable text
//! - Extracting plain text from cell markup and honouring `data-order` sort hints
//! - Formatting amounts back to grouped, fixed-decimal currency strings
//! - Totalling and sorting columns where unparsable cells count as zero
//! - Computing purchase totals from quantity and unit price
//! - Exporting tables to timestamped CSV files

pub mod cell;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod html;
pub mod input;
pub mod models;
pub mod numeric;
pub mod purchase;
pub mod table;

// Re-export commonly used types
pub use cell::numeric_value_from_cell;
pub use config::{AppConfig, ExportConfig, FormatConfig, ParserConfig};
pub use error::{CellAmountsError, Result};
pub use models::{CellSource, ColumnSummary, ExportCell};
pub use numeric::{NumericStringParser, format_currency, parse_numeric_string};
