mod create_profile_use_case;

pub use create_profile_use_case::CreateProfileUseCase;
