//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Required input missing or blank
    #[error("{0}")]
    Validation(String),

    /// Identifier already present in the registry
    #[error("{0}")]
    DuplicateIdentifier(String),

    /// Referenced record is absent
    #[error("{0}")]
    NotFound(String),

    /// Credential pair rejected at the login gate
    #[error("Incorrect ID or Password")]
    LoginFailed,
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a duplicate identifier error with message
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateIdentifier(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Title used when the error is surfaced in a dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::LoginFailed => "Login Failed",
            _ => "Error",
        }
    }
}
