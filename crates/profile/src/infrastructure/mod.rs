pub mod api;
pub mod imgbb;
pub mod postgres;
