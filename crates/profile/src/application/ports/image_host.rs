// crates/profile/src/application/ports/image_host.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

/// Fichier binaire à publier chez l'hébergeur tiers
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostedImage {
    pub url: String,
}

/// Proxy pur : aucun traitement d'image, le fichier part tel quel.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<HostedImage>;
}
