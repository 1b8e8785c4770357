//! Test utilities for numeric parsing and formatting
//!
//! Shared sample values and a tolerance helper used across the test modules.


/// Tolerance for comparing parsed values against expectations
pub const TOLERANCE: f64 = 1e-9;

/// Two-decimal amounts covering zero, cents, thousands and millions, both signs
pub const SAMPLE_AMOUNTS: &[f64] = &[
    0.0,
    0.01,
    0.5,
    7.25,
    12.5,
    999.99,
    1000.0,
    1234.56,
    32234.0,
    720749.86,
    1234567.89,
    987654321.12,
    -0.99,
    -1234.56,
    -1000000.0,
];

/// Assert that `actual` parsed and lies within [`TOLERANCE`] of `expected`
pub fn assert_parsed(input: &str, actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("{:?} should parse to {}", input, expected));
    assert!(
        (value - expected).abs() < TOLERANCE,
        "{:?}: expected {}, got {}",
        input,
        expected,
        value
    );
}
