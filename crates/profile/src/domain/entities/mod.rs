// crates/profile/src/domain/entities/mod.rs

mod profile;
mod project;

pub use profile::Profile;
pub use project::Project;
