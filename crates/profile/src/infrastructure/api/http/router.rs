// crates/profile/src/infrastructure/api/http/router.rs

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::application::create_profile::CreateProfileUseCase;
use crate::application::get_profile_by_id::GetProfileByIdUseCase;
use crate::application::list_profiles::ListProfilesUseCase;
use crate::application::ports::ImageHost;
use crate::application::seed_profiles::SeedProfilesUseCase;
use crate::application::upload_image::UploadImageUseCase;
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::api::http::handlers::{
    create_profile, create_profile_from_form, get_profile, health, list_profiles, seed_profiles,
    upload_image,
};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Use cases partagés entre handlers
#[derive(Clone)]
pub struct AppState {
    pub create_profile: Arc<CreateProfileUseCase>,
    pub get_profile: Arc<GetProfileByIdUseCase>,
    pub list_profiles: Arc<ListProfilesUseCase>,
    pub seed_profiles: Arc<SeedProfilesUseCase>,
    pub upload_image: Arc<UploadImageUseCase>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProfileRepository>, image_host: Arc<dyn ImageHost>) -> Self {
        Self {
            create_profile: Arc::new(CreateProfileUseCase::new(repo.clone())),
            get_profile: Arc::new(GetProfileByIdUseCase::new(repo.clone())),
            list_profiles: Arc::new(ListProfilesUseCase::new(repo.clone())),
            seed_profiles: Arc::new(SeedProfilesUseCase::new(repo)),
            upload_image: Arc::new(UploadImageUseCase::new(image_host)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/profiles", get(list_profiles).post(create_profile))
        .route("/profiles/form", post(create_profile_from_form))
        .route("/profiles/:id", get(get_profile))
        .route("/seed", post(seed_profiles))
        .route(
            "/upload",
            post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
