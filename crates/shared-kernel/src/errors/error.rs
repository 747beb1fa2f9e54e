// crates/shared-kernel/src/errors/error.rs

use crate::errors::ErrorContext;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    /// Plusieurs champs invalides détectés en une seule passe (validation de schéma)
    #[error("Validation failed for fields: {}", join_fields(.0))]
    InvalidFields(Vec<ErrorContext>),

    #[error("{entity} not found with id '{id}'")]
    NotFound { entity: &'static str, id: String },

    /// Erreur liée à l'infrastructure (DB, API tierce)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    /// Donnée stockée incohérente ou bug interne
    #[error("Internal domain error: {0}")]
    Internal(String),
}

fn join_fields(errors: &[ErrorContext]) -> String {
    errors
        .iter()
        .map(|c| c.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Erreur corrigeable par l'appelant, jamais rejouée automatiquement
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidFields(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Détail champ par champ, quelle que soit la variante de validation
    pub fn field_errors(&self) -> Vec<ErrorContext> {
        match self {
            Self::Validation { field, reason } => vec![ErrorContext::new(*field, reason.clone())],
            Self::InvalidFields(errors) => errors.clone(),
            _ => Vec::new(),
        }
    }
}
