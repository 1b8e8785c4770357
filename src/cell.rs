//! Cell value resolution.
//!
//! Turns a [`CellSource`] into the number it represents. An explicit
//! `data-order` hint takes precedence over the visible text.

use crate::html::clean_text_from_html;
use crate::models::CellSource;
use crate::numeric::{NumericStringParser, parse_float_prefix};
use tracing::trace;

/// Numeric value of a cell, or `None` when neither hint nor text is usable
pub fn numeric_value_from_cell(cell: &CellSource, parser: &NumericStringParser) -> Option<f64> {
    match cell {
        CellSource::PlainText(text) => parser.parse(text),
        CellSource::Markup { html, data_order } => {
            if let Some(hint) = data_order.as_deref().filter(|h| !h.is_empty()) {
                if let Some(value) = parse_float_prefix(hint).filter(|v| v.is_finite()) {
                    return Some(value);
                }
                trace!("Ignoring unusable data-order hint {:?}", hint);
            }
            parser.parse(&clean_text_from_html(html))
        }
    }
}

/// Numeric value of a cell, substituting zero when it is unusable
pub fn numeric_value_or_zero(cell: &CellSource, parser: &NumericStringParser) -> f64 {
    numeric_value_from_cell(cell, parser).unwrap_or(0.0)
}
