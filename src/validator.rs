//! Core validator trait and logical combinators
//!
//! This module provides the foundational `Validator` trait and the
//! combinators used to compose validators.

/// Something that can be asked whether a value of type `T` is acceptable.
///
/// `Validator` carries no state or behaviour of its own. The concrete
/// validators in this crate ([`StringValidator`](crate::StringValidator) and
/// [`NumberValidator`](crate::NumberValidator)) implement it, and so does any
/// `Fn(&T) -> bool` closure.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let short = StringValidator::new(StringConstraints::new().max_length(4));
/// assert!(short.apply("abc"));
/// assert!(!short.apply("abcde"));
///
/// let is_even = |n: &i64| n % 2 == 0;
/// assert!(is_even.apply(&4));
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Check whether the value satisfies every configured constraint.
    fn apply(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn apply(&self, value: &T) -> bool {
        self(value)
    }
}

/// Builds larger validators out of configured ones.
///
/// A single [`StringValidator`](crate::StringValidator) or
/// [`NumberValidator`](crate::NumberValidator) already requires every one of
/// its own constraints. Reach for these methods when the rule spans several
/// configurations, such as "a slug that is not a reserved name", or mixes a
/// configured validator with an ad hoc closure.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let slug = StringValidator::new(StringConstraints::new().regex("[a-z0-9-]+").unwrap());
/// let reserved = StringValidator::new(StringConstraints::new().one_of(["admin", "root"]));
///
/// let username = slug.and(reserved.not());
/// assert!(username.apply("alice"));
/// assert!(!username.apply("admin"));
/// assert!(!username.apply("Alice"));
/// ```
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized {
    /// Require `self` and then `other`; `other` is skipped once `self` rejects.
    fn and<V: Validator<T>>(self, other: V) -> And<Self, V> {
        And(self, other)
    }

    /// Accept a value if `self` or `other` accepts it.
    fn or<V: Validator<T>>(self, other: V) -> Or<Self, V> {
        Or(self, other)
    }

    /// Flip the verdict of `self`.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorExt<T> for V {}

/// Conjunction of two validators, built by [`ValidatorExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B>(pub A, pub B);

impl<T: ?Sized, A: Validator<T>, B: Validator<T>> Validator<T> for And<A, B> {
    #[inline]
    fn apply(&self, value: &T) -> bool {
        self.0.apply(value) && self.1.apply(value)
    }
}

/// Disjunction of two validators, built by [`ValidatorExt::or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<A, B>(pub A, pub B);

impl<T: ?Sized, A: Validator<T>, B: Validator<T>> Validator<T> for Or<A, B> {
    #[inline]
    fn apply(&self, value: &T) -> bool {
        self.0.apply(value) || self.1.apply(value)
    }
}

/// Negated validator, built by [`ValidatorExt::not`].
///
/// An empty configuration accepts everything, so its negation rejects
/// everything.
#[derive(Clone, Copy, Debug)]
pub struct Not<V>(pub V);

impl<T: ?Sized, V: Validator<T>> Validator<T> for Not<V> {
    #[inline]
    fn apply(&self, value: &T) -> bool {
        !self.0.apply(value)
    }
}
