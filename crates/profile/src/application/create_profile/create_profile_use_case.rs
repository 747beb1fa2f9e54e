// crates/profile/src/application/create_profile/create_profile_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::Result;

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::schema::ProfileDraft;

pub struct CreateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl CreateProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: ProfileDraft) -> Result<Profile> {
        // 1. Validation du schéma : un candidat invalide n'atteint jamais le store
        let content = draft.validate()?;

        // 2. Insertion (id + timestamps attribués par le store)
        let profile = self.repo.create(&content).await?;

        tracing::info!(profile_id = %profile.id, "Profile created");
        Ok(profile)
    }
}
