//! Purchase line totals.
//!
//! A purchase form derives its total amount from quantity × unit price.
//! Inputs come straight from form fields, so they are read leniently and
//! anything unusable or negative counts as zero.

use crate::config::FormatConfig;
use crate::numeric::parse_float_prefix;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Quantity and unit price of one purchase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub quantity: f64,
    pub unit_price: f64,
}

impl PurchaseLine {
    /// Create a line from numbers, clamping negatives and NaN to zero
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity: non_negative(quantity),
            unit_price: non_negative(unit_price),
        }
    }

    /// Create a line from raw form input
    pub fn from_inputs(quantity: &str, unit_price: &str) -> Self {
        Self::new(read_input(quantity), read_input(unit_price))
    }

    /// Quantity × unit price
    pub fn total(&self) -> f64 {
        let total = self.quantity * self.unit_price;
        debug!(
            "Purchase total: {} x {} = {:.2}",
            self.quantity, self.unit_price, total
        );
        total
    }

    /// Total with two decimals and no grouping, as written back to the form
    pub fn formatted_total(&self) -> String {
        self.formatted_total_with(&FormatConfig::us())
    }

    /// Total with the decimals and decimal separator of `config`, no grouping
    pub fn formatted_total_with(&self, config: &FormatConfig) -> String {
        let fixed = format!("{:.*}", config.decimals, non_negative(self.total()));
        if config.decimal_separator == '.' {
            fixed
        } else {
            fixed.replace('.', &config.decimal_separator.to_string())
        }
    }
}

fn read_input(raw: &str) -> f64 {
    parse_float_prefix(raw).unwrap_or(0.0)
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let line = PurchaseLine::new(4.0, 6.25);
        assert_eq!(line.total(), 25.0);
        assert_eq!(line.formatted_total(), "25.00");
    }

    #[test]
    fn test_from_inputs() {
        let line = PurchaseLine::from_inputs("3", "19.99");
        assert_eq!(line.quantity, 3.0);
        assert_eq!(line.unit_price, 19.99);
        assert_eq!(line.formatted_total(), "59.97");
    }

    #[test]
    fn test_empty_and_garbage_inputs_are_zero() {
        assert_eq!(PurchaseLine::from_inputs("", "10").formatted_total(), "0.00");
        assert_eq!(PurchaseLine::from_inputs("2", "abc").formatted_total(), "0.00");
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let line = PurchaseLine::from_inputs("-2", "10");
        assert_eq!(line.quantity, 0.0);
        assert_eq!(line.total(), 0.0);

        let line = PurchaseLine::new(2.0, -10.0);
        assert_eq!(line.unit_price, 0.0);
    }

    #[test]
    fn test_lenient_input_prefix() {
        // Form fields read like parseFloat: a grouping comma ends the number
        let line = PurchaseLine::from_inputs("1.5 kg", "1,200.00");
        assert_eq!(line.quantity, 1.5);
        assert_eq!(line.unit_price, 1.0);
        assert_eq!(line.formatted_total(), "1.50");
    }

    #[test]
    fn test_formatted_total_with_config() {
        let line = PurchaseLine::new(3.0, 19.99);
        assert_eq!(line.formatted_total_with(&FormatConfig::european()), "59,97");
        assert_eq!(
            line.formatted_total_with(&FormatConfig::us().with_decimals(0)),
            "60"
        );
    }

    #[test]
    fn test_nan_clamped() {
        let line = PurchaseLine::new(f64::NAN, 3.0);
        assert_eq!(line.total(), 0.0);
    }
}
