mod imgbb_config;
mod imgbb_image_host;

pub use imgbb_config::{ImgbbConfig, DEFAULT_IMGBB_ENDPOINT};
pub use imgbb_image_host::ImgbbImageHost;
