// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context_builder.rs

use crate::infrastructure::postgres::utils::PostgresTestContext;

const IMAGE_NAME: &str = "postgres";
const IMAGE_TAG: &str = "16-alpine";

/// Paramètres du container jetable. Les chemins de migrations sont relatifs au crate testé.
pub struct PostgresTestContextBuilder {
    pub(crate) image_tag: String,
    pub(crate) db_name: String,
    pub(crate) migrations: Vec<String>,
}

impl PostgresTestContextBuilder {
    pub(crate) fn new() -> Self {
        Self {
            image_tag: IMAGE_TAG.to_string(),
            db_name: "profiles_test".to_string(),
            migrations: Vec::new(),
        }
    }

    pub(crate) fn image_name(&self) -> &'static str {
        IMAGE_NAME
    }

    pub fn with_migrations(mut self, paths: &[&str]) -> Self {
        self.migrations = paths.iter().map(|s| s.to_string()).collect();
        self
    }

    pub async fn build(self) -> PostgresTestContext {
        PostgresTestContext::restore(self).await
    }
}
