use std::io::Write;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{CalcResult, unsupported},
            core::{EvalResult, Interpreter},
            operand::Operand,
        },
        value::core::Value,
    },
};

/// Evaluates `&&` and `||` over two already evaluated booleans.
pub fn logic(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    match (op, left, right) {
        (BinaryOperator::And, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
        (BinaryOperator::Or, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
        _ => Err(unsupported(op, left, right)),
    }
}

/// The result of `&&` or `||` when the left operand alone decides it.
#[must_use]
pub const fn decided_by(op: BinaryOperator, left: &Value) -> Option<Value> {
    match (op, left) {
        (BinaryOperator::And, Value::Boolean(false)) => Some(Value::Boolean(false)),
        (BinaryOperator::Or, Value::Boolean(true)) => Some(Value::Boolean(true)),
        _ => None,
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates `&&` or `||`, skipping the right operand when the left
    /// boolean already decides the result.
    pub(crate) fn short_circuit<L, R>(&mut self,
                                      op: BinaryOperator,
                                      left: &L,
                                      right: &R)
                                      -> EvalResult<Value>
        where L: Operand + ?Sized,
              R: Operand + ?Sized
    {
        let left = left.evaluate(self)?;
        if let Some(result) = decided_by(op, &left) {
            return Ok(result);
        }
        let right = right.evaluate(self)?;
        self.calculate_binary(op, &left, &right)
    }
}
