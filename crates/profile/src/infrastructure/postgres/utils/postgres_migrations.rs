// crates/profile/src/infrastructure/postgres/utils/postgres_migrations.rs

/// Migrations du module profile. La fondation kernel doit être appliquée avant.
pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations/postgres").run(pool).await?;
    tracing::info!("Profile migrations applied");
    Ok(())
}
