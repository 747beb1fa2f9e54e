// crates/profile/src/application/upload_image/upload_image_command.rs

use crate::application::ports::ImageUpload;

/// `image` vaut `None` quand la requête ne contenait aucun fichier
#[derive(Debug, Clone, Default)]
pub struct UploadImageCommand {
    pub image: Option<ImageUpload>,
}
