mod image_host;

pub use image_host::{HostedImage, ImageHost, ImageUpload};
