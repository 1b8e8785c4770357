//! Table input from CSV.
//!
//! Reads exported or hand-made CSV tables into [`CellSource`] rows. Fields
//! that still carry markup become [`CellSource::Markup`] cells.

use crate::error::{CellAmountsError, Result};
use crate::models::CellSource;
use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

/// Options for reading a CSV table
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub has_headers: bool,
    pub delimiter: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
        }
    }
}

/// A table of cells with optional headers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<CellSource>>,
}

impl Table {
    /// Cells of one zero-based column; every row must have it
    pub fn column(&self, index: usize) -> Result<Vec<CellSource>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .get(index)
                    .cloned()
                    .ok_or_else(|| CellAmountsError::InvalidColumn {
                        column: index,
                        row,
                        width: cells.len(),
                    })
            })
            .collect()
    }
}

/// Classify a raw CSV field as text or markup
///
/// Fields with tags or character references are markup and get decoded.
pub fn cell_from_field(field: &str) -> CellSource {
    if field.contains('<') || field.contains('&') {
        CellSource::markup(field)
    } else {
        CellSource::text(field)
    }
}

/// Read a whole CSV table
pub fn read_table<R: Read>(reader: R, options: TableOptions) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = if options.has_headers {
        Some(csv_reader.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(cell_from_field).collect());
    }

    debug!("Read table with {} rows", rows.len());
    Ok(Table { headers, rows })
}
