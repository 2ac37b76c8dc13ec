//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied an argument outside the accepted domain.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A calculation could not be completed (e.g., decimal overflow).
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl AppError {
    /// Returns the stable error code used in logs and diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Calculation(_) => "CALCULATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}
