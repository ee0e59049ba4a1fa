use std::{fmt, rc::Rc};

use crate::util::num::i64_to_f64;

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, that a variable
/// can hold, or that a function can return.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value; also the result of a function without `return`.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons and logical operators, and required by every
    /// condition and ternary predicate.
    Boolean(bool),
    /// A 64 bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// A double precision floating-point number.
    Double(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A type literal, the right operand of `typeof`.
    Type(ValueType),
}

/// The type of a [`Value`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `boolean`
    Boolean,
    /// `int`
    Integer,
    /// `double`
    Double,
    /// `string`
    String,
    /// The type of type literals.
    Type,
}

impl ValueType {
    /// Looks up a type literal by its keyword.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::core::ValueType;
    ///
    /// assert_eq!(ValueType::from_keyword("int"), Some(ValueType::Integer));
    /// assert_eq!(ValueType::from_keyword("integer"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Integer),
            "double" => Some(Self::Double),
            "boolean" => Some(Self::Boolean),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// The name used in source code and messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two numeric operands after promotion to a common type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Numbers {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was a double.
    Doubles(f64, f64),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl Value {
    /// The type of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Integer(_) => ValueType::Integer,
            Self::Double(_) => ValueType::Double,
            Self::Str(_) => ValueType::String,
            Self::Type(_) => ValueType::Type,
        }
    }

    /// The boolean, if this value is one.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Promotes two numeric values to a common type.
    ///
    /// Two integers stay integers; any double makes both doubles. Returns
    /// `None` when either value is not numeric.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::core::{Numbers, Value};
    ///
    /// assert_eq!(Value::promote(&Value::Integer(2), &Value::Integer(3)),
    ///            Some(Numbers::Integers(2, 3)));
    /// assert_eq!(Value::promote(&Value::Integer(2), &Value::Double(0.5)),
    ///            Some(Numbers::Doubles(2.0, 0.5)));
    /// assert_eq!(Value::promote(&Value::Integer(2), &Value::from("x")), None);
    /// ```
    #[must_use]
    pub fn promote(left: &Self, right: &Self) -> Option<Numbers> {
        match (left, right) {
            (Self::Integer(a), Self::Integer(b)) => Some(Numbers::Integers(*a, *b)),
            (Self::Integer(a), Self::Double(b)) => Some(Numbers::Doubles(i64_to_f64(*a), *b)),
            (Self::Double(a), Self::Integer(b)) => Some(Numbers::Doubles(*a, i64_to_f64(*b))),
            (Self::Double(a), Self::Double(b)) => Some(Numbers::Doubles(*a, *b)),
            _ => None,
        }
    }

    /// Equality as used by `==`, `!=` and switch labels.
    ///
    /// Integers and doubles compare numerically; any other pair of values is
    /// equal only when both have the same type and content.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).equals(&Value::Double(2.0)));
    /// assert!(!Value::Integer(1).equals(&Value::from("1")));
    /// assert!(Value::Null.equals(&Value::Null));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn equals(&self, other: &Self) -> bool {
        if let Some(numbers) = Self::promote(self, other) {
            return match numbers {
                Numbers::Integers(a, b) => a == b,
                Numbers::Doubles(a, b) => a == b,
            };
        }
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Type(a), Self::Type(b)) => a == b,
            _ => false,
        }
    }

    /// Renders the value as it would be written in source code; strings are
    /// quoted.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Str(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double(d) if d.is_finite() && d.fract() == 0.0 && d.abs() < 1e16 => {
                write!(f, "{d:.1}")
            },
            Self::Double(d) => write!(f, "{d}"),
            Self::Str(s) => f.write_str(s),
            Self::Type(t) => t.fmt(f),
        }
    }
}
