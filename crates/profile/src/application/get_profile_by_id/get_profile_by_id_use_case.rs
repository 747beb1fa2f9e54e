// crates/profile/src/application/get_profile_by_id/get_profile_by_id_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::{EntityMetadata, EntityOptionExt};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::Result;

use crate::application::get_profile_by_id::GetProfileByIdCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::ProfileId;

pub struct GetProfileByIdUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl GetProfileByIdUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: GetProfileByIdCommand) -> Result<Profile> {
        // Un identifiant mal formé ne peut correspondre à aucun document
        let Some(id) = ProfileId::parse(&command.id) else {
            return Err(Profile::not_found(&command.id));
        };

        self.repo.get_by_id(&id).await?.ok_or_not_found(&command.id)
    }
}
