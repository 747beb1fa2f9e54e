// crates/profile/src/domain/mod.rs

pub mod entities;
pub mod repositories;
pub mod schema;
pub mod value_objects;
