// crates/shared-kernel/src/domain/value_objects/mod.rs

mod required_text;
mod value_object;

pub use required_text::RequiredText;
pub use value_object::ValueObject;
