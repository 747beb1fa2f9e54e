// crates/profile/src/application/mod.rs

pub mod create_profile;
pub mod get_profile_by_id;
pub mod list_profiles;
pub mod ports;
pub mod seed_profiles;
pub mod upload_image;
