//! String validation
//!
//! [`StringConstraints`] collects the optional checks for a string and
//! [`StringValidator`] applies all of them at once. Any check left unset is
//! simply skipped, so an empty configuration accepts every string.
//!
//! # Example
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let code = StringValidator::new(
//!     StringConstraints::new()
//!         .regex("[A-Z]{3}")
//!         .unwrap()
//!         .one_of(["USD", "EUR", "GBP"]),
//! );
//!
//! assert!(code.apply("EUR"));
//! assert!(!code.apply("eur"));
//! assert!(!code.apply("JPY"));
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::PatternError;
use crate::validator::Validator;
use crate::value::Value;

type StringFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A compiled whole-value pattern and the text the caller supplied.
#[derive(Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

/// Optional checks applied by a [`StringValidator`].
///
/// Every field starts out unset. Builder methods consume and return the
/// configuration so checks can be chained.
#[derive(Clone, Default)]
pub struct StringConstraints {
    regex: Option<Pattern>,
    one_of: Option<Vec<String>>,
    func: Option<StringFn>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringConstraints {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the whole value to match `pattern`.
    ///
    /// The pattern is anchored at both ends, so `[0-9]+` accepts `"123"` but
    /// not `"12a"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::prelude::*;
    ///
    /// let digits = StringValidator::new(StringConstraints::new().regex("[0-9]+").unwrap());
    /// assert!(digits.apply("123"));
    /// assert!(!digits.apply("12a"));
    ///
    /// assert!(StringConstraints::new().regex("(unclosed").is_err());
    /// ```
    pub fn regex(mut self, pattern: impl AsRef<str>) -> Result<Self, PatternError> {
        let pattern = pattern.as_ref();
        Regex::new(pattern).map_err(|err| PatternError::new(pattern, err))?;

        // A trailing `(?x)` comment runs to the end of the line and swallows
        // the closing anchor. The pattern compiled on its own, so a failure
        // here means verbose mode is active and a line break is whitespace.
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .or_else(|_| Regex::new(&format!("^(?:{pattern}\n)$")))
            .map_err(|err| PatternError::new(pattern, err))?;

        self.regex = Some(Pattern {
            source: pattern.to_string(),
            regex,
        });
        Ok(self)
    }

    /// Require the value to equal one of `values` exactly (case-sensitive).
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Require the value to satisfy a custom predicate.
    ///
    /// A panic raised by `func` is not caught.
    pub fn func<F>(mut self, func: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.func = Some(Arc::new(func));
        self
    }

    /// Require at least `min` characters (inclusive).
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require at most `max` characters (inclusive).
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Returns `true` if no check is configured.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
            && self.one_of.is_none()
            && self.func.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
    }

    /// Name of the first configured check that rejects `value`, if any.
    fn rejected_by(&self, value: &str) -> Option<&'static str> {
        let len = || value.chars().count();
        let checks: [(&'static str, Option<bool>); 5] = [
            ("regex", self.regex.as_ref().map(|p| p.regex.is_match(value))),
            (
                "one_of",
                self.one_of
                    .as_ref()
                    .map(|allowed| allowed.iter().any(|s| s == value)),
            ),
            ("func", self.func.as_ref().map(|f| (**f)(value))),
            ("min_length", self.min_length.map(|min| len() >= min)),
            ("max_length", self.max_length.map(|max| len() <= max)),
        ];

        checks
            .into_iter()
            .find(|(_, passed)| *passed == Some(false))
            .map(|(name, _)| name)
    }
}

impl fmt::Debug for StringConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringConstraints")
            .field("regex", &self.regex.as_ref().map(|p| p.source.as_str()))
            .field("one_of", &self.one_of)
            .field("func", &self.func.as_ref().map(|_| "<fn>"))
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .finish()
    }
}

/// Validator for string values.
///
/// Built once from a [`StringConstraints`] and immutable afterwards. Cloning
/// shares any custom predicate.
///
/// # Example
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let v = StringValidator::new(StringConstraints::new().min_length(3).max_length(5));
/// assert!(!v.apply("ab"));
/// assert!(v.apply("abc"));
/// assert!(!v.apply("abcdef"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringValidator {
    constraints: StringConstraints,
}

impl StringValidator {
    /// Create a validator from its configuration.
    pub fn new(constraints: StringConstraints) -> Self {
        Self { constraints }
    }

    /// The configuration this validator was built from.
    pub fn constraints(&self) -> &StringConstraints {
        &self.constraints
    }

    /// Validate a dynamically typed value.
    ///
    /// Anything other than [`Value::String`] is rejected, whatever the
    /// configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rulecheck::prelude::*;
    ///
    /// let any_string = StringValidator::default();
    /// assert!(any_string.apply_value(&Value::from("hi")));
    /// assert!(!any_string.apply_value(&Value::from(3.0)));
    /// assert!(!any_string.apply_value(&Value::Null));
    /// ```
    pub fn apply_value(&self, value: &Value) -> bool {
        match value.as_str() {
            Some(s) => self.apply(s),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    constraint = "type",
                    kind = value.kind(),
                    "string validator rejected value"
                );
                false
            }
        }
    }
}

impl From<StringConstraints> for StringValidator {
    fn from(constraints: StringConstraints) -> Self {
        Self::new(constraints)
    }
}

impl Validator<str> for StringValidator {
    fn apply(&self, value: &str) -> bool {
        match self.constraints.rejected_by(value) {
            None => true,
            Some(_constraint) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    constraint = _constraint,
                    len = value.chars().count(),
                    "string validator rejected value"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(constraints: StringConstraints) -> StringValidator {
        StringValidator::new(constraints)
    }

    #[test]
    fn test_empty_accepts_any_string() {
        let v = StringValidator::default();
        assert!(v.constraints().is_empty());
        assert!(v.apply(""));
        assert!(v.apply("anything at all"));
    }

    #[test]
    fn test_empty_rejects_non_strings() {
        let v = StringValidator::default();
        assert!(!v.apply_value(&Value::Number(1.0)));
        assert!(!v.apply_value(&Value::Bool(true)));
        assert!(!v.apply_value(&Value::Null));
        assert!(v.apply_value(&Value::String("ok".to_string())));
    }

    #[test]
    fn test_type_check_wins_over_other_checks() {
        let v = validator(StringConstraints::new().func(|_| true));
        assert!(!v.apply_value(&Value::Number(0.0)));
    }

    #[test]
    fn test_regex_matches_whole_value() {
        let v = validator(StringConstraints::new().regex("[0-9]+").unwrap());
        assert!(v.apply("123"));
        assert!(!v.apply("12a"));
        assert!(!v.apply("a12"));
        assert!(!v.apply(""));
    }

    #[test]
    fn test_regex_with_explicit_anchors() {
        let v = validator(StringConstraints::new().regex("^[0-9]+$").unwrap());
        assert!(v.apply("123"));
        assert!(!v.apply("12a"));
    }

    #[test]
    fn test_regex_alternation_is_grouped() {
        let v = validator(StringConstraints::new().regex("a|ab").unwrap());
        assert!(v.apply("a"));
        assert!(v.apply("ab"));
        assert!(!v.apply("xab"));
    }

    #[test]
    fn test_invalid_regex() {
        let err = StringConstraints::new().regex("[unclosed").unwrap_err();
        assert_eq!(err.pattern(), "[unclosed");
    }

    #[test]
    fn test_invalid_regex_reports_pattern_as_written() {
        let err = StringConstraints::new().regex("(open").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("(open"));
        assert!(!message.contains("^(?:"));
    }

    #[test]
    fn test_verbose_regex_with_trailing_comment() {
        let v = validator(
            StringConstraints::new()
                .regex("(?x)[0-9]+ # digits")
                .unwrap(),
        );
        assert!(v.apply("123"));
        assert!(!v.apply("12a"));
        assert!(!v.apply("123\n"));
    }

    #[test]
    fn test_verbose_regex_without_comment() {
        let v = validator(StringConstraints::new().regex("(?x) [a-z]+ - [0-9]+").unwrap());
        assert!(v.apply("abc-12"));
        assert!(!v.apply("abc - 12"));
    }

    #[test]
    fn test_debug_shows_pattern_as_written() {
        let c = StringConstraints::new().regex("[0-9]+").unwrap();
        let debug = format!("{:?}", c);
        assert!(debug.contains("regex: Some(\"[0-9]+\")"));
    }

    #[test]
    fn test_one_of_is_exact() {
        let v = validator(StringConstraints::new().one_of(["a", "b"]));
        assert!(v.apply("a"));
        assert!(v.apply("b"));
        assert!(!v.apply("A"));
        assert!(!v.apply("c"));
        assert!(!v.apply("a "));
    }

    #[test]
    fn test_empty_one_of_rejects_everything() {
        let v = validator(StringConstraints::new().one_of(Vec::<String>::new()));
        assert!(!v.apply(""));
        assert!(!v.apply("a"));
    }

    #[test]
    fn test_func() {
        let v = validator(StringConstraints::new().func(|s| s.starts_with("http")));
        assert!(v.apply("https://example.com"));
        assert!(!v.apply("ftp://example.com"));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let v = validator(StringConstraints::new().min_length(3).max_length(5));
        assert!(!v.apply("ab"));
        assert!(v.apply("abc"));
        assert!(v.apply("abcde"));
        assert!(!v.apply("abcdef"));
    }

    #[test]
    fn test_length_counts_characters() {
        let v = validator(StringConstraints::new().max_length(3));
        assert!(v.apply("héé"));
        assert!(v.apply("日本語"));
        assert!(!v.apply("日本語!"));
    }

    #[test]
    fn test_inverted_length_bounds_reject_everything() {
        let v = validator(StringConstraints::new().min_length(5).max_length(2));
        assert!(!v.apply("abc"));
        assert!(!v.apply(""));
    }

    #[test]
    fn test_all_checks_combined() {
        let v = validator(
            StringConstraints::new()
                .regex("[a-z]+")
                .unwrap()
                .one_of(["red", "green", "blue", "Blue"])
                .func(|s| s != "green")
                .min_length(3)
                .max_length(4),
        );
        assert!(v.apply("red"));
        assert!(v.apply("blue"));
        assert!(!v.apply("Blue")); // regex
        assert!(!v.apply("green")); // func and max_length
        assert!(!v.apply("pink")); // one_of
    }

    #[test]
    fn test_rejected_by_reports_first_failure() {
        let c = StringConstraints::new().one_of(["abc"]).min_length(4);
        assert_eq!(c.rejected_by("abc"), Some("min_length"));
        assert_eq!(c.rejected_by("abcd"), Some("one_of"));
        assert_eq!(StringConstraints::new().rejected_by("x"), None);
    }

    #[test]
    fn test_clone_shares_func() {
        let v = validator(StringConstraints::new().func(|s| s.len() == 2));
        let copy = v.clone();
        assert!(copy.apply("ok"));
        assert!(!copy.apply("no!"));
    }

    #[test]
    fn test_debug_hides_func() {
        let v = validator(StringConstraints::new().func(|_| true).min_length(1));
        let debug = format!("{:?}", v);
        assert!(debug.contains("<fn>"));
        assert!(debug.contains("min_length: Some(1)"));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_func_panic_propagates() {
        let v = validator(StringConstraints::new().func(|_| panic!("boom")));
        v.apply("x");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_rejection_is_traced() {
            let v = validator(StringConstraints::new().max_length(2));
            assert!(!v.apply("toolong"));
            assert!(logs_contain("string validator rejected value"));
            assert!(logs_contain("max_length"));
        }

        #[traced_test]
        #[test]
        fn test_rejection_trace_omits_input() {
            let v = validator(StringConstraints::new().min_length(12));
            assert!(!v.apply("hunter2"));
            assert!(logs_contain("len=7"));
            assert!(!logs_contain("hunter2"));
        }

        #[traced_test]
        #[test]
        fn test_type_rejection_is_traced() {
            let v = StringValidator::default();
            assert!(!v.apply_value(&Value::Bool(false)));
            assert!(logs_contain("string validator rejected value"));
            assert!(logs_contain("type"));
        }
    }
}
