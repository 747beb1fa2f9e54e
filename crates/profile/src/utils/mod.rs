// crates/profile/src/utils/mod.rs

pub mod image_host_stub;
pub mod profile_repository_stub;

pub use image_host_stub::ImageHostStub;
pub use profile_repository_stub::{ProfileRepositoryStub, SteppingClock};
