use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::binary::{CalcResult, unsupported},
        value::core::Value,
    },
    util::num::shift_distance,
};

/// Evaluates `&`, `|` and `^`.
///
/// Integers combine bit by bit. Booleans combine logically with both sides
/// already evaluated.
pub fn bitwise(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    let value = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(match op {
            BinaryOperator::BitwiseAnd => a & b,
            BinaryOperator::BitwiseOr => a | b,
            BinaryOperator::BitwiseXor => a ^ b,
            _ => return Err(unsupported(op, left, right)),
        }),
        (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(match op {
            BinaryOperator::BitwiseAnd => a & b,
            BinaryOperator::BitwiseOr => a | b,
            BinaryOperator::BitwiseXor => a ^ b,
            _ => return Err(unsupported(op, left, right)),
        }),
        _ => return Err(unsupported(op, left, right)),
    };
    Ok(value)
}

/// Evaluates `<<`, `>>` and `>>>` on integers.
///
/// Only the low six bits of the distance are used. `>>` keeps the sign,
/// `>>>` shifts zeros in.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::bitwise::shift, value::core::Value},
/// };
///
/// assert_eq!(shift(BinaryOperator::ShiftRight, &Value::Integer(-8), &Value::Integer(1)),
///            Ok(Value::Integer(-4)));
/// assert_eq!(shift(BinaryOperator::UnsignedShiftRight, &Value::Integer(-1), &Value::Integer(60)),
///            Ok(Value::Integer(15)));
/// ```
pub fn shift(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    let (Value::Integer(value), Value::Integer(distance)) = (left, right) else {
        return Err(unsupported(op, left, right));
    };
    let distance = shift_distance(*distance);

    let shifted = match op {
        BinaryOperator::ShiftLeft => value.wrapping_shl(distance),
        BinaryOperator::ShiftRight => value.wrapping_shr(distance),
        BinaryOperator::UnsignedShiftRight => {
            value.cast_unsigned().wrapping_shr(distance).cast_signed()
        },
        _ => return Err(unsupported(op, left, right)),
    };
    Ok(Value::Integer(shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeErrorKind;

    #[test]
    fn booleans_combine_logically() {
        assert_eq!(bitwise(BinaryOperator::BitwiseXor, &Value::Boolean(true), &Value::Boolean(true)),
                   Ok(Value::Boolean(false)));
        assert_eq!(bitwise(BinaryOperator::BitwiseOr, &Value::Boolean(false), &Value::Boolean(true)),
                   Ok(Value::Boolean(true)));
    }

    #[test]
    fn integers_combine_bitwise() {
        assert_eq!(bitwise(BinaryOperator::BitwiseAnd, &Value::Integer(12), &Value::Integer(10)),
                   Ok(Value::Integer(8)));
    }

    #[test]
    fn mixed_types_are_rejected() {
        assert!(matches!(bitwise(BinaryOperator::BitwiseAnd,
                                 &Value::Integer(1),
                                 &Value::Boolean(true)),
                         Err(RuntimeErrorKind::UnsupportedOperands { .. })));
        assert!(shift(BinaryOperator::ShiftLeft, &Value::Double(1.0), &Value::Integer(1)).is_err());
    }

    #[test]
    fn distance_is_masked() {
        assert_eq!(shift(BinaryOperator::ShiftLeft, &Value::Integer(1), &Value::Integer(65)),
                   Ok(Value::Integer(2)));
    }
}
