// src/error.rs

//! Unified error handling for the stadium directory.

use std::fmt;

use thiserror::Error;

/// Result type alias for stadium directory operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (timeout, connection, non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The wiki page no longer matches the expected layout
    #[error("Page structure error: {0}")]
    PageStructure(String),

    /// A required header label is missing from the stadium table
    #[error("Column not found in table header: {0}")]
    ColumnNotFound(String),

    /// A single table row could not be decoded
    #[error("Row {row} parse error: {message}")]
    RowParse { row: usize, message: String },

    /// Lookup input did not match any team alias
    #[error(
        "Unrecognized team '{0}'. Try a city abbreviation (e.g. DET), \
         a full name (e.g. Detroit Lions) or a mascot (e.g. Lions)"
    )]
    UnknownTeam(String),

    /// Team alias resolved, but no stadium lists that team
    #[error("Team '{0}' is recognized but has no stadium in the current data")]
    NoDataForTeam(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a page structure error.
    pub fn page_structure(message: impl Into<String>) -> Self {
        Self::PageStructure(message.into())
    }

    /// Create a per-row parse error.
    pub fn row_parse(row: usize, message: impl fmt::Display) -> Self {
        Self::RowParse {
            row,
            message: message.to_string(),
        }
    }
}
