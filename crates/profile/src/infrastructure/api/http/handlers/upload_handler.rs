// crates/profile/src/infrastructure/api/http/handlers/upload_handler.rs

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::ports::ImageUpload;
use crate::application::upload_image::UploadImageCommand;
use crate::infrastructure::api::http::AppState;

const IMAGE_FIELD: &str = "image";

pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // Corps non multipart : illisible, pas "absent"
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Upload body is not multipart");
            return upload_failed(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let image = match read_image(multipart).await {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable multipart body");
            return upload_failed(e.status());
        }
    };

    match state.upload_image.execute(UploadImageCommand { image }).await {
        Ok(hosted) => Json(json!({
            "success": true,
            "url": hosted.url,
            "message": "Image uploaded successfully!",
        }))
        .into_response(),

        Err(e) if e.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No file provided" })),
        )
            .into_response(),

        Err(e) => {
            tracing::error!(error = %e, "Image upload failed");
            upload_failed(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// 413 quand la limite de taille est dépassée, 500 sinon
fn upload_failed(status: StatusCode) -> Response {
    let status = match status {
        StatusCode::PAYLOAD_TOO_LARGE => status,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": "Upload failed" }))).into_response()
}

/// Premier champ `image` du formulaire ; `None` seulement s'il est absent
async fn read_image(mut multipart: Multipart) -> Result<Option<ImageUpload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        }));
    }

    Ok(None)
}
