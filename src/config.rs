//! Configuration management and validation.
//!
//! Provides configuration structures for the numeric parser, display
//! formatting and CSV export, loadable from a JSON file.

use crate::constants::{
    CURRENCY_CODES, CURRENCY_SYMBOLS, DEFAULT_CSV_SEPARATOR, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_DECIMAL_SEPARATOR, DEFAULT_DECIMALS, DEFAULT_EXPORT_FILENAME,
    DEFAULT_THOUSANDS_SEPARATOR,
};
use crate::error::{CellAmountsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Currency markers the parser strips before reading digits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Single-character currency symbols
    pub currency_symbols: Vec<char>,

    /// Alphabetic currency codes, matched case-insensitively
    pub currency_codes: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            currency_symbols: CURRENCY_SYMBOLS.to_vec(),
            currency_codes: CURRENCY_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Add a currency symbol to strip
    pub fn with_currency_symbol(mut self, symbol: char) -> Self {
        if !self.currency_symbols.contains(&symbol) {
            self.currency_symbols.push(symbol);
        }
        self
    }

    /// Add a currency code to strip
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        let code = code.into().to_uppercase();
        if !self.currency_codes.contains(&code) {
            self.currency_codes.push(code);
        }
        self
    }
}

/// Display settings for formatted amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Number of fraction digits
    pub decimals: usize,

    /// Character between integer and fraction
    pub decimal_separator: char,

    /// Character grouping integer digits by three
    pub thousands_separator: char,

    /// Prefix used for currency display
    pub currency_symbol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::us()
    }
}

impl FormatConfig {
    /// en-US layout: `1,234.56`
    pub fn us() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Continental European layout: `1.234,56`
    pub fn european() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            decimal_separator: ',',
            thousands_separator: '.',
            currency_symbol: "€".to_string(),
        }
    }

    /// Set the number of fraction digits
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Check that the separators can be told apart when parsed back
    pub fn validate(&self) -> Result<()> {
        if self.decimal_separator == self.thousands_separator {
            return Err(CellAmountsError::configuration(format!(
                "decimal and thousands separators must differ (both '{}')",
                self.decimal_separator
            )));
        }
        if self.decimal_separator.is_ascii_digit() || self.thousands_separator.is_ascii_digit() {
            return Err(CellAmountsError::configuration(
                "separators cannot be digits",
            ));
        }
        Ok(())
    }
}

/// CSV export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Field separator
    pub separator: char,

    /// Filename stem; a timestamp and `.csv` are appended
    pub base_filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_CSV_SEPARATOR,
            base_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

impl ExportConfig {
    /// Set the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the filename stem
    pub fn with_base_filename(mut self, name: impl Into<String>) -> Self {
        self.base_filename = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.separator.is_ascii() {
            return Err(CellAmountsError::configuration(format!(
                "CSV separator must be a single ASCII character, got '{}'",
                self.separator
            )));
        }
        if self.base_filename.trim().is_empty() {
            return Err(CellAmountsError::configuration(
                "export filename cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for the cell-amounts tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parser: ParserConfig,
    pub format: FormatConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CellAmountsError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;
        self.export.validate()?;
        Ok(())
    }

    /// Replace the parser section
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Replace the format section
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Replace the export section
    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }
}
