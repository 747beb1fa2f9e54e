mod postgres_context;
mod postgres_context_builder;

pub use postgres_context::PostgresContext;
pub use postgres_context_builder::PostgresContextBuilder;
