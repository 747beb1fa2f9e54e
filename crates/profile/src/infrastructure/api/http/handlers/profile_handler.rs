// crates/profile/src/infrastructure/api/http/handlers/profile_handler.rs

use axum::body::Bytes;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::json;
use shared_kernel::errors::DomainError;

use crate::application::get_profile_by_id::GetProfileByIdCommand;
use crate::domain::schema::{ProfileDraft, ProfileForm};
use crate::infrastructure::api::http::mappers::{create_error_response, fetch_error_response};
use crate::infrastructure::api::http::AppState;

pub async fn list_profiles(State(state): State<AppState>) -> Response {
    match state.list_profiles.execute().await {
        Ok(profiles) => Json(profiles).into_response(),
        Err(e) => fetch_error_response(e, "Failed to fetch profiles"),
    }
}

pub async fn get_profile(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state
        .get_profile
        .execute(GetProfileByIdCommand::new(id))
        .await
    {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => fetch_error_response(e, "Failed to fetch profile"),
    }
}

/// Le corps est lu comme JSON quel que soit le `Content-Type`
pub async fn create_profile(State(state): State<AppState>, body: Bytes) -> Response {
    let draft = match serde_json::from_slice::<ProfileDraft>(&body) {
        Ok(draft) => draft,
        Err(e) => return create_error_response(malformed_body(e.to_string())),
    };

    create(&state, draft).await
}

pub async fn create_profile_from_form(
    State(state): State<AppState>,
    payload: Result<Form<ProfileForm>, FormRejection>,
) -> Response {
    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => return create_error_response(malformed_body(rejection.body_text())),
    };

    create(&state, form.into_draft()).await
}

async fn create(state: &AppState, draft: ProfileDraft) -> Response {
    match state.create_profile.execute(draft).await {
        Ok(profile) => Json(json!({ "success": true, "profile": profile })).into_response(),
        Err(e) => create_error_response(e),
    }
}

fn malformed_body(reason: String) -> DomainError {
    DomainError::Validation {
        field: "body",
        reason,
    }
}
