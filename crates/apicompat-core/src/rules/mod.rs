pub mod validation;

pub use validation::{validate_descriptor, validate_snapshot};
