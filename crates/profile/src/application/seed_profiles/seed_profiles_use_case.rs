// crates/profile/src/application/seed_profiles/seed_profiles_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::{internal_err, Result};

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::schema::{NewProfile, ProfileDraft};

const SEED_PROFILES: &str = include_str!("seed_profiles.json");

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// Le store contenait déjà des profils : rien n'a été écrit
    AlreadySeeded { count: u64 },
    Seeded(Vec<Profile>),
}

pub struct SeedProfilesUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl SeedProfilesUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<SeedOutcome> {
        let count = self.repo.count().await?;
        if count > 0 {
            tracing::info!(count, "Seed skipped, store already populated");
            return Ok(SeedOutcome::AlreadySeeded { count });
        }

        let profiles = self.repo.create_many(&Self::seed_data()?).await?;
        tracing::info!(count = profiles.len(), "Store seeded with demo profiles");

        Ok(SeedOutcome::Seeded(profiles))
    }

    /// Les données embarquées passent par le même validateur que les saisies client
    pub fn seed_data() -> Result<Vec<NewProfile>> {
        let drafts: Vec<ProfileDraft> = serde_json::from_str(SEED_PROFILES)
            .map_err(|e| internal_err(format!("Invalid bundled seed data: {e}")))?;

        drafts.into_iter().map(ProfileDraft::validate).collect()
    }
}
