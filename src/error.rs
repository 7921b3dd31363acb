//! Unified error hierarchy for FuelRS
//!
//! The calculator itself never fails; errors come from the validation
//! boundary in front of it and from configuration handling.

use thiserror::Error;

/// Top-level error type for all FuelRS operations
#[derive(Debug, Error)]
pub enum FuelError {
    /// Input rejected before calculation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value outside its documented domain
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Result type alias for FuelRS operations
pub type Result<T> = std::result::Result<T, FuelError>;

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } => *field,
            ValidationError::NotFinite { field } => *field,
        }
    }
}

impl FuelError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FuelError::Validation(_) => ErrorSeverity::Warning,
            FuelError::Configuration(_) => ErrorSeverity::Error,
            FuelError::Io(_) => ErrorSeverity::Error,
            FuelError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FuelError::Validation(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            }) => {
                format!(
                    "The {} value {} is outside the supported range ({} to {}). \
                     Please adjust it and try again.",
                    field.replace('_', " "),
                    value,
                    min,
                    max
                )
            }
            FuelError::Validation(ValidationError::NotFinite { field }) => {
                format!("The {} value is not a valid number.", field.replace('_', " "))
            }
            FuelError::Configuration(reason) => {
                format!("Configuration problem: {}. Check your config file.", reason)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Internal failure that should never happen
    Critical,
    /// Error that prevents operation
    Error,
    /// Rejected user input
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
