use std::io::Write;

use crate::{
    ast::{StepOperator, UnaryOperator},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{
            binary::CalcResult,
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

/// Applies a unary operator to a value.
///
/// Supported operators:
/// - `+` and `-` on integers and doubles; integer negation wraps.
/// - `!` on booleans.
/// - `~` on integers.
///
/// `++` and `--` are merged with their variable during resolution and go
/// through [`step`] instead; applied here they are unsupported.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
///
/// # Returns
/// The computed value, or `UnsupportedOperand` for any other type.
///
/// # Example
/// ```
/// use sprig::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::calculate_unary, value::core::Value},
/// };
///
/// assert_eq!(calculate_unary(UnaryOperator::Minus, &Value::Double(2.5)),
///            Ok(Value::Double(-2.5)));
/// assert_eq!(calculate_unary(UnaryOperator::BitwiseNot, &Value::Integer(0)),
///            Ok(Value::Integer(-1)));
/// assert!(calculate_unary(UnaryOperator::Not, &Value::Integer(0)).is_err());
/// ```
pub fn calculate_unary(op: UnaryOperator, value: &Value) -> CalcResult {
    let result = match (op, value) {
        (UnaryOperator::Plus, Value::Integer(_) | Value::Double(_)) => value.clone(),
        (UnaryOperator::Minus, Value::Integer(i)) => Value::Integer(i.wrapping_neg()),
        (UnaryOperator::Minus, Value::Double(d)) => Value::Double(-d),
        (UnaryOperator::Not, Value::Boolean(b)) => Value::Boolean(!b),
        (UnaryOperator::BitwiseNot, Value::Integer(i)) => Value::Integer(!i),
        _ => return Err(unsupported(&op.to_string(), value)),
    };
    Ok(result)
}

/// Adds or subtracts one.
pub fn step(op: StepOperator, value: &Value) -> CalcResult {
    match (op, value) {
        (StepOperator::Increment, Value::Integer(i)) => Ok(Value::Integer(i.wrapping_add(1))),
        (StepOperator::Decrement, Value::Integer(i)) => Ok(Value::Integer(i.wrapping_sub(1))),
        (StepOperator::Increment, Value::Double(d)) => Ok(Value::Double(d + 1.0)),
        (StepOperator::Decrement, Value::Double(d)) => Ok(Value::Double(d - 1.0)),
        _ => Err(unsupported(&op.to_string(), value)),
    }
}

fn unsupported(operator: &str, value: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::UnsupportedOperand { operator: operator.to_string(),
                                           operand:  value.value_type(), }
}

impl<W: Write> Interpreter<W> {
    /// Applies [`calculate_unary`] and attaches the current location to
    /// failures.
    pub fn calculate_unary(&self, op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        calculate_unary(op, value).map_err(|kind| self.runtime_error(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::core::ValueType;

    #[test]
    fn step_keeps_type() {
        assert_eq!(step(StepOperator::Increment, &Value::Double(0.5)), Ok(Value::Double(1.5)));
        assert_eq!(step(StepOperator::Decrement, &Value::Integer(i64::MIN)),
                   Ok(Value::Integer(i64::MAX)));
    }

    #[test]
    fn step_rejects_strings() {
        assert_eq!(step(StepOperator::Increment, &Value::from("a")),
                   Err(RuntimeErrorKind::UnsupportedOperand { operator: "++".to_string(),
                                                              operand:  ValueType::String, }));
    }

    #[test]
    fn plus_rejects_booleans() {
        assert!(calculate_unary(UnaryOperator::Plus, &Value::Boolean(true)).is_err());
    }

    #[test]
    fn unmerged_steps_are_unsupported() {
        assert_eq!(calculate_unary(UnaryOperator::Increment, &Value::Integer(1)),
                   Err(RuntimeErrorKind::UnsupportedOperand { operator: "++".to_string(),
                                                              operand:  ValueType::Integer, }));
    }
}
