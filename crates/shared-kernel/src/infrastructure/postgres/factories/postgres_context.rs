// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::PostgresContextBuilder;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Handle explicite sur la pool Postgres : acquis au démarrage du process, injecté
/// dans les repositories, libéré à l'arrêt.
pub struct PostgresContext {
    pool: PgPool,
    url: String,
}

impl PostgresContext {
    /// Builder alimenté par les variables d'environnement `PROFILE_DB_*`
    pub fn builder() -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::new()
    }

    /// Builder sans lecture d'environnement (tests)
    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Postgres pool closed");
    }

    pub(crate) async fn connect(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.max_connections)
            .min_connections(builder.min_connections)
            .acquire_timeout(builder.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InfrastructureFailure,
                    format!("Postgres connection failed: {}", e),
                )
            })?;

        tracing::info!(
            max_connections = builder.max_connections,
            min_connections = builder.min_connections,
            acquire_timeout_secs = builder.connect_timeout.as_secs(),
            "Postgres pool ready"
        );

        Ok(Self {
            pool,
            url: builder.url,
        })
    }
}
