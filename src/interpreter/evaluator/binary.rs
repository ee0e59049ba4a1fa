use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::value::core::Value,
};

/// Operator dispatch and assignment.
pub mod core;

/// `+ - * / %`, including string concatenation.
pub mod arithmetic;

/// `& | ^` and the shift family.
pub mod bitwise;

/// Relational operators, equality and `typeof`.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;

/// Result of a pure calculator: a value, or the kind of runtime error to
/// report at the current location.
pub type CalcResult = Result<Value, RuntimeErrorKind>;

/// Builds the error for an operator applied to unsupported operand types.
pub(crate) fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::UnsupportedOperands { operator: op.to_string(),
                                            left:     left.value_type(),
                                            right:    right.value_type(), }
}
