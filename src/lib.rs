//! # rulecheck
//!
//! Small, reusable validators for strings and numbers.
//!
//! A validator is built once from a set of optional constraints and then
//! answers a single question: does this value satisfy *all* of them? Unset
//! constraints are skipped, so an empty configuration accepts everything of
//! the right type.
//!
//! ## Quick Example
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let zip_code = StringValidator::new(
//!     StringConstraints::new()
//!         .regex("[0-9]{5}")
//!         .unwrap(),
//! );
//! assert!(zip_code.apply("90210"));
//! assert!(!zip_code.apply("9021"));
//!
//! let dice = NumberValidator::new(NumberConstraints::new().min_value(1).max_value(6));
//! assert!(dice.apply(&6));
//! assert!(!dice.apply(&7));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace!` event naming the failing constraint whenever
//!   a value is rejected.
//! - `proptest`: an `Arbitrary` implementation for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod guard;
pub mod number;
pub mod string;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use error::PatternError;
pub use guard::{ensure, ensure_with};
pub use number::{NumberConstraints, NumberValidator};
pub use string::{StringConstraints, StringValidator};
pub use validator::{And, Not, Or, Validator, ValidatorExt};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::PatternError;
    pub use crate::guard::{ensure, ensure_with};
    pub use crate::number::{NumberConstraints, NumberValidator};
    pub use crate::string::{StringConstraints, StringValidator};
    pub use crate::validator::{Validator, ValidatorExt};
    pub use crate::value::Value;
}
