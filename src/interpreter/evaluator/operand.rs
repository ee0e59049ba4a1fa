use std::io::Write;

use crate::{
    ast::{Expression, Lexeme, Variable},
    error::InternalError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// A not yet evaluated operand.
///
/// Calculators receive their operands unevaluated so that assignment can
/// reach the variable itself and `&&`/`||` can skip their right side.
pub trait Operand {
    /// Computes the operand's value.
    fn evaluate<W: Write>(&self, interpreter: &mut Interpreter<W>) -> EvalResult<Value>;

    /// The variable this operand names, if it is a plain variable reference.
    fn variable(&self) -> Option<&Variable>;
}

impl Operand for Expression {
    fn evaluate<W: Write>(&self, interpreter: &mut Interpreter<W>) -> EvalResult<Value> {
        interpreter.evaluate(self)
    }

    fn variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

impl Operand for Lexeme {
    fn evaluate<W: Write>(&self, interpreter: &mut Interpreter<W>) -> EvalResult<Value> {
        match self {
            Self::Constant(value) => Ok(value.clone()),
            Self::Variable(variable) => interpreter.read_variable(variable.name()),
            Self::Expression(expression) => interpreter.evaluate(expression),
            Self::Operator(_) | Self::Parenthesis(_) | Self::TernaryMark(_) => {
                Err(InternalError::UnexpectedLexeme(self.to_string()).into())
            },
        }
    }

    fn variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}
