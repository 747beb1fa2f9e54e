pub mod repositories;
pub mod rows;
pub mod utils;

pub use repositories::PostgresProfileRepository;
pub use utils::run_postgres_migrations;
