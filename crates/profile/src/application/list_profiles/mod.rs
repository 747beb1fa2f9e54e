mod list_profiles_use_case;

pub use list_profiles_use_case::ListProfilesUseCase;
