pub mod validate;

pub use validate::{contains_normalized, normalize, require_id, require_text, trimmed_option};
