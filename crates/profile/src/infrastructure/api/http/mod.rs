pub mod handlers;
pub mod mappers;
mod router;

pub use router::{router, AppState};
