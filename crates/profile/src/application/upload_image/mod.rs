mod upload_image_command;
mod upload_image_use_case;

pub use upload_image_command::UploadImageCommand;
pub use upload_image_use_case::UploadImageUseCase;
