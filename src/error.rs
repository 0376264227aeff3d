//! Application error type shared by collaborators and services.

use serde_json::Value;

/// Errors produced outside the form itself.
///
/// Field validation never produces an `AppError`; those failures are inline
/// messages on [`crate::domain::entities::ValidationResult`]. This type covers
/// the authentication collaborator and the status channel.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The human-readable message, passed through to the user unchanged.
    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized { message, .. } | AppError::Internal { message, .. } => message,
        }
    }

    /// Stable machine-readable error code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Structured context attached by the producer.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Unauthorized { details, .. } | AppError::Internal { details, .. } => details,
        }
    }
}
