//! Locale-ambiguous numeric string parser
//!
//! Recovers a number from cell text written in US (`1,234.56`), European
//! (`1.234,56`), space-grouped (`32 234.00`) or currency-prefixed notation.
//! Unusable input yields `None`; the parser never errors.

use super::float_prefix::parse_float_prefix;
use crate::config::ParserConfig;
use crate::constants::{MAX_COMMA_FRACTION_DIGITS, MAX_DOT_FRACTION_DIGITS, NBSP_ENTITIES};
use std::sync::LazyLock;
use tracing::trace;

static DEFAULT_PARSER: LazyLock<NumericStringParser> = LazyLock::new(NumericStringParser::default);

/// Parse cell text with the default currency markers
pub fn parse_numeric_string(text: &str) -> Option<f64> {
    DEFAULT_PARSER.parse(text)
}

/// Parser for formatted numeric cell text
#[derive(Debug, Clone, Default)]
pub struct NumericStringParser {
    config: ParserConfig,
}

impl NumericStringParser {
    /// Create a parser stripping the configured currency markers
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `text` into a finite number, or `None` when no numeral is usable
    pub fn parse(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }

        let stripped = self.strip_markers(text);
        let cleaned: String = stripped
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
            .collect();

        if cleaned.is_empty() {
            trace!("No numeric characters in {:?}", text);
            return None;
        }

        let normalized = normalize_separators(&cleaned);
        let value = parse_float_prefix(&normalized).filter(|v| v.is_finite());

        trace!(
            "Parsed {:?} -> cleaned {:?} -> normalized {:?} -> {:?}",
            text, cleaned, normalized, value
        );
        value
    }

    /// Remove nbsp entities, currency codes, currency symbols and whitespace
    fn strip_markers(&self, text: &str) -> String {
        let mut result = text.to_string();
        for entity in NBSP_ENTITIES {
            if result.contains(entity) {
                result = result.replace(entity, " ");
            }
        }

        for code in self.config.currency_codes.iter().filter(|c| !c.is_empty()) {
            result = remove_ignoring_ascii_case(&result, code);
        }

        result
            .chars()
            .filter(|c| !c.is_whitespace() && !self.config.currency_symbols.contains(c))
            .collect()
    }
}

/// Remove every occurrence of `needle`, comparing ASCII letters case-insensitively
fn remove_ignoring_ascii_case(haystack: &str, needle: &str) -> String {
    let needle = needle.to_ascii_uppercase();
    let mut result = haystack.to_string();
    // ASCII uppercasing keeps byte offsets, so positions map back onto `result`
    while let Some(pos) = result.to_ascii_uppercase().find(&needle) {
        result.replace_range(pos..pos + needle.len(), "");
    }
    result
}

/// Decide which separator is the decimal marker and rewrite to `.` notation
///
/// Input holds only ASCII digits, `.`, `,` and `-`.
fn normalize_separators(cleaned: &str) -> String {
    match (cleaned.rfind('.'), cleaned.rfind(',')) {
        // The later separator is the decimal marker
        (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(comma)) => {
            if lone_separator(cleaned, ',')
                && (1..=MAX_COMMA_FRACTION_DIGITS).contains(&digits_after(cleaned, comma))
            {
                cleaned.replacen(',', ".", 1)
            } else {
                cleaned.replace(',', "")
            }
        }
        (Some(dot), None) => {
            if lone_separator(cleaned, '.')
                && (1..=MAX_DOT_FRACTION_DIGITS).contains(&digits_after(cleaned, dot))
            {
                cleaned.to_string()
            } else {
                cleaned.replace('.', "")
            }
        }
        (None, None) => cleaned.to_string(),
    }
}

fn lone_separator(cleaned: &str, separator: char) -> bool {
    cleaned.matches(separator).count() == 1
}

fn digits_after(cleaned: &str, position: usize) -> usize {
    cleaned[position + 1..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count()
}
