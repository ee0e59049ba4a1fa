use std::fmt;

use crate::{
    ast::{Expression, Operator, Variable},
    interpreter::value::core::Value,
};

/// `(` or `)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parenthesis {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// The two halves of the ternary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TernaryMark {
    /// `?`
    Question,
    /// `:`
    Colon,
}

/// The smallest classified unit of an expression.
///
/// A token becomes exactly one lexeme, except where `++`/`--` and a variable
/// are merged into a single `Expression` lexeme, or where a ternary or a
/// function invocation is collapsed into one.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    /// A literal value, including `null` and type literals.
    Constant(Value),
    /// A variable reference.
    Variable(Variable),
    /// A unary or binary operator.
    Operator(Operator),
    /// A parenthesis.
    Parenthesis(Parenthesis),
    /// `?` or `:` before ternary extraction.
    TernaryMark(TernaryMark),
    /// An already resolved sub-expression that acts as one operand.
    Expression(Box<Expression>),
}

impl Lexeme {
    /// Whether the lexeme produces a value on its own.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_) | Self::Expression(_))
    }

    /// The operator, if this lexeme is one.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Converts an operand lexeme into the equivalent simple expression.
    ///
    /// Returns `None` for operators, parentheses and ternary marks.
    #[must_use]
    pub fn into_expression(self) -> Option<Expression> {
        match self {
            Self::Constant(value) => Some(Expression::from_value(value)),
            Self::Variable(variable) => Some(Expression::Variable(variable)),
            Self::Expression(expression) => Some(*expression),
            Self::Operator(_) | Self::Parenthesis(_) | Self::TernaryMark(_) => None,
        }
    }

    /// Wraps an expression as a lexeme, unwrapping constants and variables.
    #[must_use]
    pub fn from_expression(expression: Expression) -> Self {
        match expression {
            Expression::Null => Self::Constant(Value::Null),
            Expression::Constant(value) => Self::Constant(value),
            Expression::TypeLiteral(value_type) => Self::Constant(Value::Type(value_type)),
            Expression::Variable(variable) => Self::Variable(variable),
            other => Self::Expression(Box::new(other)),
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.write_str(&value.to_literal()),
            Self::Variable(variable) => variable.fmt(f),
            Self::Operator(op) => op.fmt(f),
            Self::Parenthesis(Parenthesis::Open) => f.write_str("("),
            Self::Parenthesis(Parenthesis::Close) => f.write_str(")"),
            Self::TernaryMark(TernaryMark::Question) => f.write_str("?"),
            Self::TernaryMark(TernaryMark::Colon) => f.write_str(":"),
            Self::Expression(expression) => expression.fmt(f),
        }
    }
}
