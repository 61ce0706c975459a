// src/error.rs

//! Unified error handling for the extractor.

use thiserror::Error;

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Spreadsheet generation failed
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Date string is not `DD-MM-YYYY`
    #[error("Invalid date '{input}'. Please use DD-MM-YYYY format.")]
    InvalidDate { input: String },

    /// Start date falls after end date
    #[error("Start date {start} must be before or equal to end date {end}")]
    DateRange { start: String, end: String },

    /// Reading service returned a non-success status
    #[error("Failed to fetch {date}: {status}")]
    Status {
        date: String,
        status: reqwest::StatusCode,
    },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Whether the error is a user input problem rather than a runtime failure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidDate { .. } | Self::DateRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        assert!(AppError::invalid_date("abc").is_input_error());
        assert!(
            AppError::DateRange {
                start: "02-01-2025".into(),
                end: "01-01-2025".into()
            }
            .is_input_error()
        );
        assert!(!AppError::config("missing").is_input_error());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = AppError::invalid_date("31-13-2025");
        assert_eq!(
            err.to_string(),
            "Invalid date '31-13-2025'. Please use DD-MM-YYYY format."
        );
    }
}
