// crates/profile/src/application/upload_image/upload_image_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::{DomainError, Result};

use crate::application::ports::{HostedImage, ImageHost};
use crate::application::upload_image::UploadImageCommand;

pub struct UploadImageUseCase {
    host: Arc<dyn ImageHost>,
}

impl UploadImageUseCase {
    pub fn new(host: Arc<dyn ImageHost>) -> Self {
        Self { host }
    }

    pub async fn execute(&self, command: UploadImageCommand) -> Result<HostedImage> {
        let image = command
            .image
            .filter(|img| !img.bytes.is_empty())
            .ok_or_else(|| DomainError::Validation {
                field: "image",
                reason: "No file provided".into(),
            })?;

        let size = image.bytes.len();
        let hosted = self.host.upload(image).await?;
        tracing::info!(size, url = %hosted.url, "Image uploaded");

        Ok(hosted)
    }
}
