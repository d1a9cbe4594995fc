//! Error types for Nimbus

use thiserror::Error;

/// Result type for Nimbus operations
pub type Result<T> = std::result::Result<T, NimbusError>;

/// Rejected feedback submission
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("feedback text is required")]
    EmptyText,
}

/// Core error type for Nimbus operations
#[derive(Error, Debug)]
pub enum NimbusError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{field} must be within [{min}, {max}], got {value}")]
    InputOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Unknown IAM role: {0}")]
    UnknownRole(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NimbusError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
