//! Number validation
//!
//! [`NumberConstraints`] collects the optional checks for a number and
//! [`NumberValidator`] applies all of them at once. Both are generic over the
//! numeric type and default to `f64`.
//!
//! Comparisons use the type's own `PartialEq`/`PartialOrd`. For floats this
//! means `NaN` never matches a [`one_of`](NumberConstraints::one_of) entry and
//! fails any configured bound.
//!
//! # Example
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let v = NumberValidator::new(
//!     NumberConstraints::new()
//!         .min_value(0)
//!         .max_value(10)
//!         .one_of([2, 4, 6]),
//! );
//!
//! assert!(v.apply(&4));
//! assert!(!v.apply(&5)); // in range, but not listed
//! ```

use std::fmt;
use std::sync::Arc;

use crate::validator::Validator;
use crate::value::Value;

type NumberFn<N> = Arc<dyn Fn(&N) -> bool + Send + Sync>;

/// Optional checks applied by a [`NumberValidator`].
pub struct NumberConstraints<N = f64> {
    one_of: Option<Vec<N>>,
    func: Option<NumberFn<N>>,
    min_value: Option<N>,
    max_value: Option<N>,
}

impl<N> NumberConstraints<N> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            one_of: None,
            func: None,
            min_value: None,
            max_value: None,
        }
    }

    /// Require the value to equal one of `values`.
    pub fn one_of(mut self, values: impl IntoIterator<Item = N>) -> Self {
        self.one_of = Some(values.into_iter().collect());
        self
    }

    /// Require the value to satisfy a custom predicate.
    ///
    /// A panic raised by `func` is not caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::prelude::*;
    ///
    /// let even = NumberValidator::new(NumberConstraints::new().func(|n: &i64| n % 2 == 0));
    /// assert!(!even.apply(&3));
    /// assert!(even.apply(&4));
    /// ```
    pub fn func<F>(mut self, func: F) -> Self
    where
        F: Fn(&N) -> bool + Send + Sync + 'static,
    {
        self.func = Some(Arc::new(func));
        self
    }

    /// Require the value to be at least `min` (inclusive).
    pub fn min_value(mut self, min: N) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Require the value to be at most `max` (inclusive).
    pub fn max_value(mut self, max: N) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Returns `true` if no check is configured.
    pub fn is_empty(&self) -> bool {
        self.one_of.is_none()
            && self.func.is_none()
            && self.min_value.is_none()
            && self.max_value.is_none()
    }
}

impl<N: PartialOrd> NumberConstraints<N> {
    /// Name of the first configured check that rejects `value`, if any.
    fn rejected_by(&self, value: &N) -> Option<&'static str> {
        let checks: [(&'static str, Option<bool>); 4] = [
            (
                "one_of",
                self.one_of.as_ref().map(|allowed| allowed.contains(value)),
            ),
            ("func", self.func.as_ref().map(|f| (**f)(value))),
            ("min_value", self.min_value.as_ref().map(|min| value >= min)),
            ("max_value", self.max_value.as_ref().map(|max| value <= max)),
        ];

        checks
            .into_iter()
            .find(|(_, passed)| *passed == Some(false))
            .map(|(name, _)| name)
    }
}

impl<N> Default for NumberConstraints<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> Clone for NumberConstraints<N> {
    fn clone(&self) -> Self {
        Self {
            one_of: self.one_of.clone(),
            func: self.func.clone(),
            min_value: self.min_value.clone(),
            max_value: self.max_value.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for NumberConstraints<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberConstraints")
            .field("one_of", &self.one_of)
            .field("func", &self.func.as_ref().map(|_| "<fn>"))
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .finish()
    }
}

/// Validator for numeric values.
///
/// Unlike [`StringValidator`](crate::StringValidator) there is no separate type
/// check: a typed `N` is a number by construction.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let percent = NumberValidator::new(NumberConstraints::new().min_value(0.0).max_value(100.0));
/// assert!(percent.apply(&0.0));
/// assert!(percent.apply(&100.0));
/// assert!(!percent.apply(&100.5));
/// assert!(!percent.apply(&f64::NAN));
/// ```
pub struct NumberValidator<N = f64> {
    constraints: NumberConstraints<N>,
}

impl<N> NumberValidator<N> {
    /// Create a validator from its configuration.
    pub fn new(constraints: NumberConstraints<N>) -> Self {
        Self { constraints }
    }

    /// The configuration this validator was built from.
    pub fn constraints(&self) -> &NumberConstraints<N> {
        &self.constraints
    }
}

impl NumberValidator<f64> {
    /// Validate a dynamically typed value.
    ///
    /// A [`Value::Number`] is checked like any `f64`. Other variants are
    /// accepted only when no check is configured, since there is nothing to
    /// compare them against; with any check configured they are rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::prelude::*;
    ///
    /// let unconstrained = NumberValidator::<f64>::default();
    /// assert!(unconstrained.apply_value(&Value::from("text")));
    ///
    /// let positive = NumberValidator::new(NumberConstraints::new().min_value(0.0));
    /// assert!(positive.apply_value(&Value::from(2.5)));
    /// assert!(!positive.apply_value(&Value::from("2.5")));
    /// ```
    pub fn apply_value(&self, value: &Value) -> bool {
        match value.as_number() {
            Some(n) => self.apply(&n),
            None if self.constraints.is_empty() => true,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    constraint = "type",
                    kind = value.kind(),
                    "number validator rejected value"
                );
                false
            }
        }
    }
}

impl<N> Default for NumberValidator<N> {
    fn default() -> Self {
        Self::new(NumberConstraints::new())
    }
}

impl<N: Clone> Clone for NumberValidator<N> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for NumberValidator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidator")
            .field("constraints", &self.constraints)
            .finish()
    }
}

impl<N> From<NumberConstraints<N>> for NumberValidator<N> {
    fn from(constraints: NumberConstraints<N>) -> Self {
        Self::new(constraints)
    }
}

impl<N> Validator<N> for NumberValidator<N>
where
    N: PartialOrd + Send + Sync,
{
    fn apply(&self, value: &N) -> bool {
        match self.constraints.rejected_by(value) {
            None => true,
            Some(_constraint) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(constraint = _constraint, "number validator rejected value");
                false
            }
        }
    }
}
