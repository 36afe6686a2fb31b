//! Configuration errors
//!
//! Validation itself never fails: every verdict is a `bool`. The one fallible
//! step is compiling a regex while building a [`StringConstraints`](crate::StringConstraints).
//!
//! # Example
//!
//! ```
//! use std::error::Error;
//! use rulecheck::StringConstraints;
//!
//! let err = StringConstraints::new().regex("[a-z").unwrap_err();
//! assert_eq!(err.pattern(), "[a-z");
//! assert!(err.source().is_some());
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A regex that failed to compile.
///
/// Keeps the pattern as the caller wrote it. The underlying
/// [`regex::Error`] is passed through unchanged, both as the `Display`
/// output and as [`source`](StdError::source).
#[derive(Debug, Clone, PartialEq)]
pub struct PatternError {
    pattern: String,
    error: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, error: regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            error,
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The error reported by the regex engine.
    pub fn inner(&self) -> &regex::Error {
        &self.error
    }

    /// Consume this error and return the regex engine's error.
    pub fn into_inner(self) -> regex::Error {
        self.error
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for PatternError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
