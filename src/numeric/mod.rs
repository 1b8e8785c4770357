//! Numeric parsing and formatting for table cell text
//!
//! ## Architecture
//!
//! - [`parser`] - Locale-ambiguous string to number conversion
//! - [`float_prefix`] - Lenient leading-float parse used by the parser and for sort hints
//! - [`format`] - Fixed-decimal, thousands-grouped display of parsed values
//!
//! ## Usage
//!
//! ```rust
//! use cell_amounts::numeric::{format_currency, parse_numeric_string};
//!
//! assert_eq!(parse_numeric_string("€1.234,56"), Some(1234.56));
//! assert_eq!(parse_numeric_string("abc"), None);
//! assert_eq!(format_currency(Some(32234.0), true), "$32,234.00");
//! ```

pub mod float_prefix;
pub mod format;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use float_prefix::parse_float_prefix;
pub use format::{format_currency, format_currency_with, format_numeric_value, group_thousands};
pub use parser::{NumericStringParser, parse_numeric_string};
