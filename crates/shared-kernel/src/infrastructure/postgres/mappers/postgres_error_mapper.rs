// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity: E::entity_name(),
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => DomainError::Infrastructure(format!(
                "{} [{}]: {}",
                E::entity_name(),
                db_err.code().unwrap_or_default(),
                db_err.message()
            )),
            // Décodage d'une colonne : la donnée stockée ne correspond plus au schéma
            sqlx::Error::ColumnDecode { index, source } => DomainError::Internal(format!(
                "Failed to decode {} column {}: {}",
                E::entity_name(),
                index,
                source
            )),
            other => DomainError::Infrastructure(other.to_string()),
        })
    }
}
