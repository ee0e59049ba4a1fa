use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::binary::{CalcResult, unsupported},
        value::core::{Numbers, Value},
    },
};

/// Evaluates `<`, `<=`, `>` and `>=`.
///
/// Numbers are promoted to a common type first; two strings compare
/// lexicographically. A comparison involving NaN is false.
pub fn compare(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    let ordering = match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => match Value::promote(left, right).ok_or_else(|| unsupported(op, left, right))? {
            Numbers::Integers(a, b) => Some(a.cmp(&b)),
            Numbers::Doubles(a, b) => a.partial_cmp(&b),
        },
    };

    let test: fn(Ordering) -> bool = match op {
        BinaryOperator::Less => Ordering::is_lt,
        BinaryOperator::LessEqual => Ordering::is_le,
        BinaryOperator::Greater => Ordering::is_gt,
        BinaryOperator::GreaterEqual => Ordering::is_ge,
        _ => return Err(unsupported(op, left, right)),
    };
    Ok(Value::Boolean(ordering.is_some_and(test)))
}

/// Evaluates `==` and `!=` with [`Value::equals`]; never fails.
#[must_use]
pub fn equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let equal = left.equals(right);
    Value::Boolean(if op == BinaryOperator::NotEqual { !equal } else { equal })
}

/// Evaluates `value typeof type`.
///
/// # Example
/// ```
/// use sprig::interpreter::{
///     evaluator::binary::comparison::type_of,
///     value::core::{Value, ValueType},
/// };
///
/// assert_eq!(type_of(&Value::Double(1.0), &Value::Type(ValueType::Double)),
///            Ok(Value::Boolean(true)));
/// assert_eq!(type_of(&Value::Integer(1), &Value::Type(ValueType::Double)),
///            Ok(Value::Boolean(false)));
/// ```
pub fn type_of(left: &Value, right: &Value) -> CalcResult {
    match right {
        Value::Type(expected) => Ok(Value::Boolean(left.value_type() == *expected)),
        _ => Err(unsupported(BinaryOperator::TypeOf, left, right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_types() {
        assert_eq!(compare(BinaryOperator::Less, &Value::Integer(1), &Value::Double(1.5)),
                   Ok(Value::Boolean(true)));
        assert_eq!(compare(BinaryOperator::GreaterEqual, &Value::Double(2.0), &Value::Integer(2)),
                   Ok(Value::Boolean(true)));
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert_eq!(compare(BinaryOperator::Greater, &Value::from("b"), &Value::from("abc")),
                   Ok(Value::Boolean(true)));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(compare(BinaryOperator::LessEqual, &Value::Double(f64::NAN), &Value::Integer(1)),
                   Ok(Value::Boolean(false)));
    }

    #[test]
    fn string_and_number_do_not_compare() {
        assert!(compare(BinaryOperator::Less, &Value::from("1"), &Value::Integer(2)).is_err());
    }

    #[test]
    fn different_types_are_unequal() {
        assert_eq!(equality(BinaryOperator::Equal, &Value::Null, &Value::Boolean(false)),
                   Value::Boolean(false));
        assert_eq!(equality(BinaryOperator::NotEqual, &Value::Integer(3), &Value::Double(3.0)),
                   Value::Boolean(false));
    }
}
