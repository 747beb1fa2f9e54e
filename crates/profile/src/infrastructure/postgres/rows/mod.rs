mod postgres_profile_row;

pub use postgres_profile_row::PostgresProfileRow;
