//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Formatting never produces one of these; they come from form submission
/// checks and configuration loading.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for reports and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the error was caused by user input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
