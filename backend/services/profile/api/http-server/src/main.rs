// backend/services/profile/api/http-server/src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

// Infrastructure - API
use profile::infrastructure::api::http::{router, AppState};
use profile::infrastructure::imgbb::{ImgbbConfig, ImgbbImageHost};

// Infrastructure - Repositories
use profile::infrastructure::postgres::repositories::PostgresProfileRepository;
use profile::infrastructure::postgres::utils::run_postgres_migrations;

// Shared Kernel
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::postgres::utils::run_kernel_postgres_migrations;

#[allow(dead_code)]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    run_server(format!("0.0.0.0:{}", port).parse()?).await
}

pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    // --- 1. STORE ---
    let pg_ctx = PostgresContext::builder()?.build().await?;
    run_kernel_postgres_migrations(&pg_ctx.pool()).await?;
    run_postgres_migrations(&pg_ctx.pool()).await?;

    // --- 2. ADAPTATEURS ---
    let profile_repo = Arc::new(PostgresProfileRepository::new(pg_ctx.pool()));
    let image_host = Arc::new(ImgbbImageHost::new(ImgbbConfig::from_env())?);

    // --- 3. USE CASES + ROUTER ---
    let app = router(AppState::new(profile_repo, image_host));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Profile HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pg_ctx.close().await;
    tracing::info!("Profile HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
