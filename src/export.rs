//! CSV export of table rows.
//!
//! Numeric cells are written with two decimals and left unquoted; text cells
//! and headers are quoted. Exported files carry a timestamp in their name.

use crate::cell::numeric_value_from_cell;
use crate::config::ExportConfig;
use crate::constants::{DEFAULT_DECIMALS, EXPORT_TIMESTAMP_FORMAT};
use crate::error::{CellAmountsError, Result};
use crate::models::{CellSource, ExportCell};
use crate::numeric::NumericStringParser;
use chrono::NaiveDateTime;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `<base>-YYYY-MM-DD_HH-MM-SS.csv`
pub fn timestamped_filename(base: &str, now: &NaiveDateTime) -> String {
    format!("{}-{}.csv", base, now.format(EXPORT_TIMESTAMP_FORMAT))
}

/// Build an export row, reading the listed columns as numbers
///
/// A numeric column whose cell cannot be parsed keeps its display text.
pub fn row_from_cells(
    cells: &[CellSource],
    numeric_columns: &[usize],
    parser: &NumericStringParser,
) -> Vec<ExportCell> {
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            if numeric_columns.contains(&index) {
                if let Some(value) = numeric_value_from_cell(cell, parser) {
                    return ExportCell::Number(value);
                }
            }
            ExportCell::Text(cell.display_text())
        })
        .collect()
}

/// Rows and headers pending export
#[derive(Debug, Clone, Default)]
pub struct CsvExport {
    headers: Vec<String>,
    rows: Vec<Vec<ExportCell>>,
    config: ExportConfig,
}

impl CsvExport {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            config,
        }
    }

    /// Set the header row
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn push_row(&mut self, row: Vec<ExportCell>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write headers and rows as CSV
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        self.config.validate()?;

        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.config.separator as u8)
            .quote_style(QuoteStyle::NonNumeric)
            .terminator(Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(writer);

        if !self.headers.is_empty() {
            csv_writer.write_record(&self.headers)?;
        }

        for row in &self.rows {
            csv_writer.write_record(row.iter().map(render_cell))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render the export as a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| CellAmountsError::configuration(format!("export is not UTF-8: {}", e)))
    }

    /// Write a timestamped CSV into `dir`, returning the file path
    pub fn write_file(&self, dir: &Path) -> Result<PathBuf> {
        self.write_file_at(dir, &chrono::Local::now().naive_local())
    }

    /// Write a CSV into `dir` named with the given timestamp
    pub fn write_file_at(&self, dir: &Path, now: &NaiveDateTime) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(timestamped_filename(&self.config.base_filename, now));
        debug!("Writing export to {}", path.display());

        let file = File::create(&path)?;
        self.write_to(file)?;

        info!("Exported {} rows to {}", self.rows.len(), path.display());
        Ok(path)
    }
}

fn render_cell(cell: &ExportCell) -> String {
    match cell {
        ExportCell::Number(value) if value.is_finite() => {
            format!("{:.*}", DEFAULT_DECIMALS, value)
        }
        ExportCell::Number(_) => format!("{:.*}", DEFAULT_DECIMALS, 0.0),
        ExportCell::Text(text) => text.clone(),
    }
}
