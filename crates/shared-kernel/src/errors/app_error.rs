// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            DomainError::Validation { .. } | DomainError::InvalidFields(_) => {
                let fields = error.field_errors();
                Self::new(ErrorCode::ValidationFailed, "Validation failed")
                    .with_details(serde_json::json!({ "fields": fields }))
            }

            // On masque le détail technique au client, il est loggé côté serveur
            DomainError::Infrastructure(reason) => {
                tracing::error!("Infrastructure failure: {}", reason);
                Self::new(
                    ErrorCode::InfrastructureFailure,
                    "An unexpected error occurred. Please try again later.",
                )
            }

            DomainError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
