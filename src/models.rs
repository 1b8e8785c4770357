//! Core data structures for cell amount processing.
//!
//! Defines the cell input union, export cell values and per-column
//! summaries used throughout the library.

use serde::{Deserialize, Serialize};

/// Where a cell's value comes from
///
/// Callers resolve their own DOM or table representation into one of these
/// before asking for a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSource {
    /// Text already extracted from the cell
    PlainText(String),
    /// Raw cell markup plus an optional explicit `data-order` sort hint
    Markup {
        html: String,
        data_order: Option<String>,
    },
}

impl CellSource {
    /// Plain-text cell
    pub fn text(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    /// Markup cell without a sort hint
    pub fn markup(html: impl Into<String>) -> Self {
        Self::Markup {
            html: html.into(),
            data_order: None,
        }
    }

    /// Markup cell carrying a `data-order` hint
    pub fn markup_with_order(html: impl Into<String>, data_order: impl Into<String>) -> Self {
        Self::Markup {
            html: html.into(),
            data_order: Some(data_order.into()),
        }
    }

    /// Cell holding an already-numeric value
    ///
    /// The exact value rides along as the `data-order` hint, so long
    /// fractions such as `0.1234` are not reread as grouped digits.
    pub fn from_number(value: f64) -> Self {
        let text = value.to_string();
        Self::markup_with_order(text.clone(), text)
    }

    /// Text shown to the user, used as the display fallback when parsing fails
    pub fn display_text(&self) -> String {
        match self {
            Self::PlainText(text) => text.trim().to_string(),
            Self::Markup { html, .. } => crate::html::clean_text_from_html(html),
        }
    }
}

impl From<&str> for CellSource {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for CellSource {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

/// A value written to an export row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExportCell {
    Number(f64),
    Text(String),
}

impl From<f64> for ExportCell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ExportCell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ExportCell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Totals for one column of cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Sum of every parsed value; unparsable cells add zero
    pub total: f64,
    /// Cells that produced a number
    pub parsed: usize,
    /// Cells that did not
    pub unparsable: usize,
}

impl ColumnSummary {
    /// Total number of cells seen
    pub fn cell_count(&self) -> usize {
        self.parsed + self.unparsable
    }

    /// Record one cell's outcome
    pub fn record(&mut self, value: Option<f64>) {
        match value {
            Some(v) => {
                self.total += v;
                self.parsed += 1;
            }
            None => self.unparsable += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_source_constructors() {
        assert_eq!(CellSource::from("12"), CellSource::PlainText("12".to_string()));
        assert_eq!(
            CellSource::markup_with_order("<td>$1</td>", "1"),
            CellSource::Markup {
                html: "<td>$1</td>".to_string(),
                data_order: Some("1".to_string()),
            }
        );
        assert_eq!(
            CellSource::from_number(12.5),
            CellSource::markup_with_order("12.5", "12.5")
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(CellSource::text("  pendiente ").display_text(), "pendiente");
        assert_eq!(
            CellSource::markup("<span>$ 1,234.00</span>").display_text(),
            "$ 1,234.00"
        );
    }

    #[test]
    fn test_column_summary_record() {
        let mut summary = ColumnSummary::default();
        summary.record(Some(10.0));
        summary.record(None);
        summary.record(Some(-2.5));

        assert_eq!(summary.total, 7.5);
        assert_eq!(summary.parsed, 2);
        assert_eq!(summary.unparsable, 1);
        assert_eq!(summary.cell_count(), 3);
    }

    #[test]
    fn test_export_cell_conversions() {
        assert_eq!(ExportCell::from(1.5), ExportCell::Number(1.5));
        assert_eq!(ExportCell::from("x"), ExportCell::Text("x".to_string()));
    }
}
