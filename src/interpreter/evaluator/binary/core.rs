use std::io::Write;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                CalcResult,
                arithmetic::{add, arithmetic},
                bitwise::{bitwise, shift},
                comparison::{compare, equality, type_of},
                logic::logic,
            },
            core::{EvalResult, Interpreter},
            operand::Operand,
        },
        value::core::Value,
    },
};

/// Applies a binary operator to two evaluated values.
///
/// Assignment operators compute the value that would be stored: plain `=`
/// yields the right value, compound forms apply their base operator. `&&` and
/// `||` evaluate eagerly here; laziness is the caller's concern.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// The computed value, or the kind of runtime error to report.
///
/// # Example
/// ```
/// use sprig::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::calculate, value::core::Value},
/// };
///
/// assert_eq!(calculate(BinaryOperator::Add, &Value::Integer(1), &Value::Double(0.5)),
///            Ok(Value::Double(1.5)));
/// assert_eq!(calculate(BinaryOperator::Add, &Value::from("n="), &Value::Integer(3)),
///            Ok(Value::from("n=3")));
/// assert!(calculate(BinaryOperator::Divide, &Value::Integer(1), &Value::Integer(0)).is_err());
/// ```
pub fn calculate(op: BinaryOperator, left: &Value, right: &Value) -> CalcResult {
    use BinaryOperator::{
        Add, AddAssign, And, AndAssign, Assign, BitwiseAnd, BitwiseOr, BitwiseXor, Divide,
        DivideAssign, Equal, Greater, GreaterEqual, Less, LessEqual, Multiply, MultiplyAssign,
        NotEqual, Or, OrAssign, Remainder, RemainderAssign, ShiftLeft, ShiftLeftAssign,
        ShiftRight, ShiftRightAssign, Subtract, SubtractAssign, TypeOf, UnsignedShiftRight,
        UnsignedShiftRightAssign, XorAssign,
    };

    match op {
        Add => add(left, right),
        Subtract | Multiply | Divide | Remainder => arithmetic(op, left, right),
        BitwiseAnd | BitwiseOr | BitwiseXor => bitwise(op, left, right),
        ShiftLeft | ShiftRight | UnsignedShiftRight => shift(op, left, right),
        Less | LessEqual | Greater | GreaterEqual => compare(op, left, right),
        Equal | NotEqual => Ok(equality(op, left, right)),
        TypeOf => type_of(left, right),
        And | Or => logic(op, left, right),
        Assign => Ok(right.clone()),
        AddAssign | SubtractAssign | MultiplyAssign | DivideAssign | RemainderAssign
        | AndAssign | OrAssign | XorAssign | ShiftLeftAssign | ShiftRightAssign
        | UnsignedShiftRightAssign => match op.compound_base() {
            Some(base) => calculate(base, left, right),
            None => Ok(right.clone()),
        },
    }
}

impl<W: Write> Interpreter<W> {
    /// Applies [`calculate`] and attaches the current location to failures.
    pub fn calculate_binary(&self,
                            op: BinaryOperator,
                            left: &Value,
                            right: &Value)
                            -> EvalResult<Value> {
        calculate(op, left, right).map_err(|kind| self.runtime_error(kind))
    }

    /// Applies a binary operator to unevaluated operands.
    ///
    /// Assignment writes through the left operand, which must name a
    /// variable. `&&` and `||` skip the right operand when the left one
    /// decides the result. Every other operator evaluates left, then right.
    pub(crate) fn apply_binary<L, R>(&mut self,
                                     op: BinaryOperator,
                                     left: &L,
                                     right: &R)
                                     -> EvalResult<Value>
        where L: Operand + ?Sized,
              R: Operand + ?Sized
    {
        if op.is_assignment() {
            return self.assign(op, left, right);
        }
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.short_circuit(op, left, right);
        }
        let left = left.evaluate(self)?;
        let right = right.evaluate(self)?;
        self.calculate_binary(op, &left, &right)
    }

    /// Evaluates an assignment and returns the stored value.
    ///
    /// Compound forms read the variable before evaluating the right side, so
    /// `x += x++` sees the original `x` on both sides.
    fn assign<L, R>(&mut self, op: BinaryOperator, left: &L, right: &R) -> EvalResult<Value>
        where L: Operand + ?Sized,
              R: Operand + ?Sized
    {
        let Some(variable) = left.variable() else {
            return Err(crate::error::InternalError::AssignmentTarget(op.to_string()).into());
        };
        let variable = variable.clone();

        let current = match op {
            BinaryOperator::Assign => None,
            _ => Some(self.read_variable(variable.name())?),
        };
        let right = right.evaluate(self)?;
        let value = match current {
            Some(current) => self.calculate_binary(op, &current, &right)?,
            None => right,
        };

        self.write_variable(&variable, value.clone())?;
        Ok(value)
    }
}
