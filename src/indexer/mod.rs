pub mod builder;
pub mod categories;

pub use builder::{build_index, resolve_category, validate_category};
pub use categories::load_approved_categories;
