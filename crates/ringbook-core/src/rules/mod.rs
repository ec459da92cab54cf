pub mod validation;

pub use validation::{validate_list_name, validate_mobile, validate_name};
