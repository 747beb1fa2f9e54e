mod seed_profiles_use_case;

pub use seed_profiles_use_case::{SeedOutcome, SeedProfilesUseCase};
