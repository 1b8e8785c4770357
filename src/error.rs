//! Error handling for cell amount operations.
//!
//! Parsing a cell never fails: an unusable value is simply `None`. These
//! errors cover the surfaces around the parser, namely configuration files,
//! CSV input and export output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellAmountsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found at path: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Column {column} out of range: row {row} has {width} fields")]
    InvalidColumn {
        column: usize,
        row: usize,
        width: usize,
    },
}

impl CellAmountsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CellAmountsError>;
