mod health_handler;
mod profile_handler;
mod seed_handler;
mod upload_handler;

pub use health_handler::health;
pub use profile_handler::{create_profile, create_profile_from_form, get_profile, list_profiles};
pub use seed_handler::seed_profiles;
pub use upload_handler::upload_image;
