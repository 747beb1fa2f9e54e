// crates/profile/src/domain/schema/mod.rs

mod new_profile;
mod profile_draft;
mod profile_form;

pub use new_profile::NewProfile;
pub use profile_draft::{ProfileDraft, ProjectDraft};
pub use profile_form::ProfileForm;
