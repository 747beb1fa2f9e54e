// crates/profile/tests/common/setup_postgres_test_db.rs

use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

/// Postgres jetable : fondation kernel + migrations du module
pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
}
