//! Application constants for cell amount parsing
//!
//! Currency markers stripped by the parser, display defaults and export
//! defaults used throughout the crate.

// =============================================================================
// Currency Markers
// =============================================================================

/// Currency symbols removed before numeric parsing
pub const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '₽'];

/// Currency codes removed before numeric parsing (matched case-insensitively)
pub const CURRENCY_CODES: &[&str] = &["MXN", "USD", "EUR", "GBP"];

/// HTML entity spellings of the non-breaking space
pub const NBSP_ENTITIES: &[&str] = &["&nbsp;", "&#160;", "&#xA0;", "&#xa0;"];

// =============================================================================
// Separator Heuristics
// =============================================================================

/// Longest digit run after a lone comma that still reads as a decimal fraction.
///
/// A three-digit run after a lone comma is a thousands group (`"1,234"` is
/// one thousand two hundred thirty-four). Totals depend on this bias.
pub const MAX_COMMA_FRACTION_DIGITS: usize = 2;

/// Longest digit run after a lone `.` still read as a fraction
///
/// Longer runs (`"1.2345"`) mean the dot was grouping and is dropped.
pub const MAX_DOT_FRACTION_DIGITS: usize = 3;

// =============================================================================
// Display Defaults
// =============================================================================

/// Fraction digits used for currency display and export
pub const DEFAULT_DECIMALS: usize = 2;

/// Default decimal separator (en-US)
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Default thousands separator (en-US)
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Default currency symbol prefixed to formatted amounts
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Export Defaults
// =============================================================================

/// Default CSV field separator
pub const DEFAULT_CSV_SEPARATOR: char = ',';

/// Base filename used when an export is not named
pub const DEFAULT_EXPORT_FILENAME: &str = "export";

/// Timestamp layout appended to export filenames
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
