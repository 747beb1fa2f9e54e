// crates/profile/src/utils/image_host_stub.rs

use std::sync::Mutex;

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::application::ports::{HostedImage, ImageHost, ImageUpload};

// --- STUB HÉBERGEUR D'IMAGES ---
pub struct ImageHostStub {
    pub url_to_return: String,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub received: Mutex<Vec<ImageUpload>>,
}

impl Default for ImageHostStub {
    fn default() -> Self {
        Self {
            url_to_return: "https://i.ibb.co/abc123/avatar.png".to_string(),
            error_to_return: Mutex::new(None),
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImageHost for ImageHostStub {
    async fn upload(&self, image: ImageUpload) -> Result<HostedImage> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.received.lock().unwrap().push(image);
        Ok(HostedImage {
            url: self.url_to_return.clone(),
        })
    }
}
