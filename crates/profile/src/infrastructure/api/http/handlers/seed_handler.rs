// crates/profile/src/infrastructure/api/http/handlers/seed_handler.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::seed_profiles::SeedOutcome;
use crate::infrastructure::api::http::AppState;

pub async fn seed_profiles(State(state): State<AppState>) -> Response {
    match state.seed_profiles.execute().await {
        Ok(SeedOutcome::AlreadySeeded { count }) => Json(json!({
            "message": "Database already has profiles",
            "count": count,
        }))
        .into_response(),

        Ok(SeedOutcome::Seeded(profiles)) => Json(json!({
            "success": true,
            "message": "Database seeded successfully",
            "data": profiles,
        }))
        .into_response(),

        Err(e) => {
            tracing::error!(error = %e, "Seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to seed database" })),
            )
                .into_response()
        }
    }
}
