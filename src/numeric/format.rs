//! Display formatting for parsed amounts
//!
//! The inverse direction of the parser: fixed fraction digits, grouped
//! thousands, optional currency prefix. Unusable values render as zero.

use crate::config::FormatConfig;

/// Insert `separator` between every group of three integer digits
///
/// A leading `-` is kept in front of the first group.
pub fn group_thousands(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let len = digits.chars().count();
    let mut grouped = String::with_capacity(sign.len() + len + len / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a value with fixed decimals and grouped thousands
///
/// `None` and non-finite values render as zero in the same layout.
pub fn format_numeric_value(value: Option<f64>, config: &FormatConfig) -> String {
    let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    let mut fixed = format!("{:.*}", config.decimals, value);

    // Rounded to zero: drop the sign of negative zero
    if fixed.starts_with('-') && fixed[1..].chars().all(|c| c == '0' || c == '.') {
        fixed.remove(0);
    }

    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut formatted = group_thousands(integer_part, config.thousands_separator);
    if let Some(fraction) = fraction_part {
        formatted.push(config.decimal_separator);
        formatted.push_str(fraction);
    }
    formatted
}

/// Format as en-US currency with two decimals, e.g. `$1,234.50`
pub fn format_currency(value: Option<f64>, include_symbol: bool) -> String {
    format_currency_with(value, &FormatConfig::us(), include_symbol)
}

/// Format with `config`, prefixing its currency symbol when requested
pub fn format_currency_with(
    value: Option<f64>,
    config: &FormatConfig,
    include_symbol: bool,
) -> String {
    let formatted = format_numeric_value(value, config);
    if include_symbol {
        format!("{}{}", config.currency_symbol, formatted)
    } else {
        formatted
    }
}
