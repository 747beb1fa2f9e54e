// crates/profile/src/domain/value_objects/mod.rs

mod profile_id;
mod skill_set;

pub use profile_id::ProfileId;
pub use skill_set::SkillSet;
