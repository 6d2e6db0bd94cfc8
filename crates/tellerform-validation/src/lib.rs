//! tellerform validation core
//!
//! Pure field predicates shared by every tellerform form: email shape,
//! password strength, length limits, choice lists and amount parsing.
//! The `garde` feature adds adapters so the same rules can be attached to
//! `#[derive(garde::Validate)]` structs.

pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

#[cfg(feature = "garde")]
pub mod garde_validators;

pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;

/// Message attached to any blank field that is required.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message attached to a value outside a fixed choice list.
pub const INVALID_CHOICE_MESSAGE: &str = "Not a valid choice.";
