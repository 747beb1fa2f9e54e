// crates/profile/src/application/list_profiles/list_profiles_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::Result;

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;

pub struct ListProfilesUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl ListProfilesUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    /// Du plus récent au plus ancien ; l'ordre est garanti par le repository
    pub async fn execute(&self) -> Result<Vec<Profile>> {
        let profiles = self.repo.list_all().await?;
        tracing::debug!(count = profiles.len(), "Profiles listed");
        Ok(profiles)
    }
}
