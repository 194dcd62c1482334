//! Domain models with validation at construction
//!
//! All request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod report;
pub mod user;
pub mod validation;

pub use report::validate_report;
pub use user::{Email, NewUser, UserName, UserUpdate};
pub use validation::ValidationError;
