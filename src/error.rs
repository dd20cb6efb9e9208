//! Error types shared across the crate

use thiserror::Error;

/// Errors raised while loading or validating plan parameters
#[derive(Debug, Error)]
pub enum PlanError {
    /// Out-of-range or logically inconsistent input
    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },

    /// A configuration value that could not be parsed
    #[error("invalid parameter '{field}': cannot parse '{value}'")]
    Parse { field: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlanError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        PlanError::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the validation family (bad values rather than bad files)
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PlanError::InvalidParameter { .. } | PlanError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
