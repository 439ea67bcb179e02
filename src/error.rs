//! Error types for mortgage calculations

use thiserror::Error;

/// Errors raised by the calculator and its I/O surfaces
#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MortgageError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
