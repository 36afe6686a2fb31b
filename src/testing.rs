//! Testing utilities for validators
//!
//! Assertion macros that print the rejected (or unexpectedly accepted) input
//! on failure, which a bare `assert!(v.apply(x))` does not.
//!
//! # Example
//!
//! ```rust
//! use rulecheck::prelude::*;
//! use rulecheck::{assert_accepts, assert_rejects};
//!
//! let v = StringValidator::new(StringConstraints::new().one_of(["on", "off"]));
//! assert_accepts!(v, "on");
//! assert_rejects!(v, "ON");
//! ```

/// Assert that a validator accepts every given value.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
/// use rulecheck::assert_accepts;
///
/// let v = NumberValidator::new(NumberConstraints::new().max_value(3));
/// assert_accepts!(v, &1, &2, &3);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($validator:expr, $($value:expr),+ $(,)?) => {{
        let validator = &$validator;
        $(
            let value = $value;
            if !$crate::Validator::apply(validator, value) {
                panic!("Expected {:?} to be accepted, but it was rejected", value);
            }
        )+
    }};
}

/// Assert that a validator rejects every given value.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
/// use rulecheck::assert_rejects;
///
/// let v = NumberValidator::new(NumberConstraints::new().max_value(3));
/// assert_rejects!(v, &4, &100);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($validator:expr, $($value:expr),+ $(,)?) => {{
        let validator = &$validator;
        $(
            let value = $value;
            if $crate::Validator::apply(validator, value) {
                panic!("Expected {:?} to be rejected, but it was accepted", value);
            }
        )+
    }};
}
