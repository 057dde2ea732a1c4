//! Utility functions

pub mod validation;

pub use validation::{validate_entry_point_name, validate_source_code};
