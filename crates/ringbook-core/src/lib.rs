pub mod domain;
pub mod dto;
pub mod error;
pub mod ops;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::{CoreError, CoreErrorKind};
pub use ops::Created;
pub use rules::*;
