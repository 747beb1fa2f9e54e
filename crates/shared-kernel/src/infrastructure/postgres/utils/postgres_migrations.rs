// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

/// Fondation commune à tous les modules (fonction trigger `updated_at`).
/// Idempotent : peut être rejoué à chaque démarrage.
pub async fn run_kernel_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_foundation.sql");
    sqlx::raw_sql(schema).execute(pool).await?;
    tracing::info!("Shared Kernel migrations applied");
    Ok(())
}
