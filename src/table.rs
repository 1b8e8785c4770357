//! Column aggregation and ordering.
//!
//! Unparsable cells never block a total or a sort: they count as zero.

use crate::cell::numeric_value_from_cell;
use crate::models::{CellSource, ColumnSummary};
use crate::numeric::NumericStringParser;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Summarize a column of cells
pub fn summarize_column<'a, I>(cells: I, parser: &NumericStringParser) -> ColumnSummary
where
    I: IntoIterator<Item = &'a CellSource>,
{
    let mut summary = ColumnSummary::default();
    for (row, cell) in cells.into_iter().enumerate() {
        let value = numeric_value_from_cell(cell, parser);
        if value.is_none() {
            warn!(
                "Row {}: {:?} is not a number, counted as zero",
                row,
                cell.display_text()
            );
        }
        summary.record(value);
    }

    debug!(
        "Column summary: total={} parsed={} unparsable={}",
        summary.total, summary.parsed, summary.unparsable
    );
    summary
}

/// Sum of a column, unparsable cells contributing zero
pub fn column_total<'a, I>(cells: I, parser: &NumericStringParser) -> f64
where
    I: IntoIterator<Item = &'a CellSource>,
{
    summarize_column(cells, parser).total
}

/// Sort key for a parsed value; `None` sorts as zero
pub fn sort_key(value: Option<f64>) -> f64 {
    // Adding 0.0 folds -0.0 into 0.0 so total_cmp sees them as equal
    value.filter(|v| !v.is_nan()).map(|v| v + 0.0).unwrap_or(0.0)
}

/// Compare two cells by numeric value
pub fn compare_cells(a: &CellSource, b: &CellSource, parser: &NumericStringParser) -> Ordering {
    let key_a = sort_key(numeric_value_from_cell(a, parser));
    let key_b = sort_key(numeric_value_from_cell(b, parser));
    key_a.total_cmp(&key_b)
}

/// Stable ascending sort of cells by numeric value
pub fn sort_cells(cells: &mut [CellSource], parser: &NumericStringParser) {
    // Parse each cell once rather than on every comparison
    let mut keyed: Vec<(f64, CellSource)> = cells
        .iter()
        .map(|cell| (sort_key(numeric_value_from_cell(cell, parser)), cell.clone()))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    for (slot, (_, cell)) in cells.iter_mut().zip(keyed) {
        *slot = cell;
    }
}
