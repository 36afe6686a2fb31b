//! Turning verdicts into `Result`s
//!
//! Validators only answer yes or no. These helpers attach a caller-chosen
//! error to a "no", which is convenient at API boundaries that already speak
//! `Result`.
//!
//! Both helpers take anything that dereferences to the validated type
//! (`String`, `&str`, `Box<str>`, ...). Plain numbers are checked with
//! [`Validator::apply`] directly.

use std::ops::Deref;

use crate::validator::Validator;

/// Keep a value if the validator accepts it.
///
/// Returns `Ok(value)` when the validator accepts, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let username = StringValidator::new(StringConstraints::new().min_length(3));
///
/// assert_eq!(ensure(String::from("alice"), &username, "too short"), Ok(String::from("alice")));
/// assert_eq!(ensure(String::from("al"), &username, "too short"), Err("too short"));
/// ```
pub fn ensure<T, E, V>(value: T, validator: &V, error: E) -> Result<T, E>
where
    T: Deref,
    V: Validator<T::Target> + ?Sized,
{
    if validator.apply(&*value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Keep a value if the validator accepts it, building the error lazily.
///
/// Like [`ensure`], but the error is produced from the rejected value.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let username = StringValidator::new(StringConstraints::new().min_length(3));
///
/// let result = ensure_with(String::from("al"), &username, |s| {
///     format!("'{}' is too short (min 3 chars)", s)
/// });
/// assert_eq!(result, Err("'al' is too short (min 3 chars)".to_string()));
/// ```
pub fn ensure_with<T, E, V, F>(value: T, validator: &V, error_fn: F) -> Result<T, E>
where
    T: Deref,
    V: Validator<T::Target> + ?Sized,
    F: FnOnce(&T) -> E,
{
    if validator.apply(&*value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
