// crates/profile/src/infrastructure/api/http/mappers/error_mapper.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use shared_kernel::errors::{AppError, DomainError};

/// Seul `NotFound` sort du lot : validation et panne du store restent des 500,
/// `code` dans le corps permet au client de les distinguer.
pub fn http_status(error: &DomainError) -> StatusCode {
    if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Lectures : corps `{ "error": ... }`, message générique sauf pour le 404
pub fn fetch_error_response(error: DomainError, failure_message: &'static str) -> Response {
    let status = http_status(&error);
    let message = if error.is_not_found() {
        tracing::debug!(error = %error, "Lookup miss");
        format!("{} not found", entity_of(&error))
    } else {
        tracing::error!(error = %error, "{}", failure_message);
        failure_message.to_string()
    };

    (status, Json(json!({ "error": message }))).into_response()
}

pub fn create_error_response(error: DomainError) -> Response {
    let status = http_status(&error);
    if error.is_validation() {
        tracing::info!(error = %error, "Profile rejected");
    }

    let app_error = AppError::from(error);
    let body = json!({
        "success": false,
        "error": app_error.message,
        "code": app_error.code,
        "details": app_error.details.unwrap_or(Value::Null),
    });

    (status, Json(body)).into_response()
}

fn entity_of(error: &DomainError) -> &'static str {
    match error {
        DomainError::NotFound { entity, .. } => entity,
        _ => "Resource",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_kernel::errors::ErrorContext;

    #[test]
    fn test_status_mapping() {
        let not_found = DomainError::NotFound {
            entity: "Profile",
            id: "x".into(),
        };
        let invalid = DomainError::InvalidFields(vec![ErrorContext::new("name", "Please provide a name")]);
        let down = DomainError::Infrastructure("pool timed out".into());

        assert_eq!(http_status(&not_found), StatusCode::NOT_FOUND);
        assert_eq!(http_status(&invalid), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http_status(&down), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
