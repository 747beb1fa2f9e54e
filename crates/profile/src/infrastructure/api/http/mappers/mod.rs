mod error_mapper;

pub use error_mapper::{create_error_response, fetch_error_response, http_status};
