// crates/profile/src/infrastructure/imgbb/imgbb_image_host.rs

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use shared_kernel::errors::{AppError, AppResult, DomainError, ErrorCode, Result};

use crate::application::ports::{HostedImage, ImageHost, ImageUpload};
use crate::infrastructure::imgbb::ImgbbConfig;

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    #[serde(default)]
    success: bool,
    data: Option<ImgbbData>,
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

pub struct ImgbbImageHost {
    client: reqwest::Client,
    config: ImgbbConfig,
}

impl ImgbbImageHost {
    pub fn new(config: ImgbbConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InternalError,
                    format!("Failed to build imgbb client: {}", e),
                )
            })?;

        if config.api_key.is_none() {
            tracing::warn!("IMGBB_API_KEY not set, uploads will fail");
        }

        Ok(Self { client, config })
    }

    fn part(image: ImageUpload) -> Result<Part> {
        let part = Part::bytes(image.bytes).file_name(image.file_name);
        match image.content_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| DomainError::Validation {
                    field: "image",
                    reason: format!("Invalid content type '{}': {}", mime, e),
                }),
            None => Ok(part),
        }
    }
}

#[async_trait]
impl ImageHost for ImgbbImageHost {
    async fn upload(&self, image: ImageUpload) -> Result<HostedImage> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::Infrastructure("IMGBB_API_KEY is not configured".into()))?;

        let form = Form::new().part("image", Self::part(image)?);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", key)])
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Infrastructure(format!("imgbb request failed: {}", e)))?;

        let status = response.status();
        let body: ImgbbResponse = response.json().await.map_err(|e| {
            DomainError::Infrastructure(format!("imgbb returned an unreadable body ({}): {}", status, e))
        })?;

        match body {
            ImgbbResponse {
                success: true,
                data: Some(data),
            } => Ok(HostedImage { url: data.url }),
            _ => Err(DomainError::Infrastructure(format!(
                "imgbb rejected the upload ({})",
                status
            ))),
        }
    }
}
