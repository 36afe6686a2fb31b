//! Dynamically typed input values
//!
//! Most callers validate typed data (`&str`, `f64`, `i64`, ...) and never
//! need this module. [`Value`] exists for inputs whose type is only known at
//! runtime, for example fields pulled out of a loosely typed record.
//!
//! # Example
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let name = StringValidator::new(StringConstraints::new().min_length(1));
//! let inputs = [Value::from("alice"), Value::from(42.0), Value::Null];
//!
//! let verdicts: Vec<bool> = inputs.iter().map(|v| name.apply_value(v)).collect();
//! assert_eq!(verdicts, vec![true, false, false]);
//! ```

/// A value whose type is checked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text.
    String(String),
    /// Any number, stored as `f64`.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// No value.
    Null,
}

impl Value {
    /// Returns the text if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<String>().prop_map(Value::String),
            any::<f64>().prop_map(Value::Number),
            any::<bool>().prop_map(Value::Bool),
            Just(Value::Null),
        ]
        .boxed()
    }
}
