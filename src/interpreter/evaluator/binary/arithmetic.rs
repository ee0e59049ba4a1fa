use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::binary::{CalcResult, unsupported},
        value::core::{Numbers, Value},
    },
};

/// Adds two numbers, or concatenates when either side is a string.
///
/// The non-string side is rendered with its display form, so
/// `"n=" + 1.0` gives `"n=1.0"`.
pub fn add(left: &Value, right: &Value) -> CalcResult {
    if matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)) {
        return Ok(Value::from(format!("{left}{right}")));
    }
    arithmetic(BinaryOperator::Add, left, right)
}

/// Evaluates `+ - * / %` over numbers.
///
/// Integer arithmetic wraps on overflow. An integer zero divisor is an error
/// for both division and remainder, even when the dividend is a double;
/// doubles divided by `0.0` follow IEEE 754.
pub fn arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    if matches!(op, BinaryOperator::Divide | BinaryOperator::Remainder)
       && matches!(right, Value::Integer(0))
       && matches!(left, Value::Integer(_) | Value::Double(_))
    {
        return Err(RuntimeErrorKind::DivisionByZero);
    }

    let numbers = Value::promote(left, right).ok_or_else(|| unsupported(op, left, right))?;

    let value = match numbers {
        Numbers::Integers(a, b) => Value::Integer(match op {
            BinaryOperator::Add => a.wrapping_add(b),
            BinaryOperator::Subtract => a.wrapping_sub(b),
            BinaryOperator::Multiply => a.wrapping_mul(b),
            BinaryOperator::Divide => a.wrapping_div(b),
            BinaryOperator::Remainder => a.wrapping_rem(b),
            _ => return Err(unsupported(op, left, right)),
        }),
        Numbers::Doubles(a, b) => Value::Double(match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
            BinaryOperator::Remainder => a % b,
            _ => return Err(unsupported(op, left, right)),
        }),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(arithmetic(BinaryOperator::Add, &Value::Integer(i64::MAX), &Value::Integer(1)),
                   Ok(Value::Integer(i64::MIN)));
        assert_eq!(arithmetic(BinaryOperator::Divide,
                              &Value::Integer(i64::MIN),
                              &Value::Integer(-1)),
                   Ok(Value::Integer(i64::MIN)));
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(arithmetic(BinaryOperator::Divide, &Value::Integer(-7), &Value::Integer(2)),
                   Ok(Value::Integer(-3)));
        assert_eq!(arithmetic(BinaryOperator::Remainder, &Value::Integer(-7), &Value::Integer(2)),
                   Ok(Value::Integer(-1)));
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(arithmetic(BinaryOperator::Remainder, &Value::Double(1.5), &Value::Integer(0)),
                   Err(RuntimeErrorKind::DivisionByZero));
        assert_eq!(arithmetic(BinaryOperator::Divide, &Value::Double(1.0), &Value::Double(0.0)),
                   Ok(Value::Double(f64::INFINITY)));
    }

    #[test]
    fn concatenation_uses_display_form() {
        assert_eq!(add(&Value::Boolean(true), &Value::from("!")), Ok(Value::from("true!")));
        assert_eq!(add(&Value::from("x"), &Value::Double(2.0)), Ok(Value::from("x2.0")));
        assert_eq!(add(&Value::from("x"), &Value::Null), Ok(Value::from("xnull")));
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(arithmetic(BinaryOperator::Multiply,
                                    &Value::Boolean(true),
                                    &Value::Integer(2)),
                         Err(RuntimeErrorKind::UnsupportedOperands { .. })));
    }
}
