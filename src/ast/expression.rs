use std::{fmt, rc::Rc};

use crate::{
    ast::{BinaryOperator, Lexeme, Operator, StepOperator, Variable},
    interpreter::value::core::{Value, ValueType},
};

/// A resolved, evaluable expression.
///
/// Expressions are built once by the resolver and evaluated any number of
/// times. General operator expressions are stored as [`PostfixNotation`];
/// the other variants are the operands that postfix sequences are built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// The `null` literal.
    Null,
    /// A boolean, integer, double or string literal.
    Constant(Value),
    /// A type literal such as `int`, the right operand of `typeof`.
    TypeLiteral(ValueType),
    /// A variable reference.
    Variable(Variable),
    /// `++x` or `--x`; yields the updated value.
    UnaryPrefix {
        /// `++` or `--`.
        operator: StepOperator,
        /// The variable being updated.
        variable: Variable,
    },
    /// `x++` or `x--`; yields the value before the update.
    UnaryPostfix {
        /// `++` or `--`.
        operator: StepOperator,
        /// The variable being updated.
        variable: Variable,
    },
    /// `predicate ? on_true : on_false`; only the selected branch is evaluated.
    Ternary {
        /// Must evaluate to a boolean.
        predicate: Box<Self>,
        /// Evaluated when the predicate is `true`.
        on_true:   Box<Self>,
        /// Evaluated when the predicate is `false`.
        on_false:  Box<Self>,
    },
    /// A general operator expression in postfix order.
    Postfix(PostfixNotation),
    /// A call of a user-defined function.
    FunctionInvocation {
        /// The function name.
        name:      Rc<str>,
        /// Argument expressions, evaluated in the caller's scope.
        arguments: Vec<Self>,
    },
}

impl Expression {
    /// The simple expression for a literal value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Type(value_type) => Self::TypeLiteral(value_type),
            other => Self::Constant(other),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Constant(value) => f.write_str(&value.to_literal()),
            Self::TypeLiteral(value_type) => value_type.fmt(f),
            Self::Variable(variable) => variable.fmt(f),
            Self::UnaryPrefix { operator, variable } => write!(f, "{operator}{variable}"),
            Self::UnaryPostfix { operator, variable } => write!(f, "{variable}{operator}"),
            Self::Ternary { predicate,
                            on_true,
                            on_false, } => write!(f, "({predicate} ? {on_true} : {on_false})"),
            Self::Postfix(notation) => f.write_str(notation.text()),
            Self::FunctionInvocation { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    argument.fmt(f)?;
                }
                f.write_str(")")
            },
        }
    }
}

/// An operator expression stored in postfix (RPN) order.
///
/// The lexeme sequence is immutable and shared between clones. Evaluating a
/// well-formed sequence always leaves exactly one operand on the stack.
///
/// For every `&&` and `||` the notation also records where its right operand
/// starts, so the evaluator can skip the whole right operand once the left
/// one decides the result.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixNotation {
    lexemes:        Rc<[Lexeme]>,
    text:           String,
    short_circuits: Rc<[Option<usize>]>,
}

impl PostfixNotation {
    /// Wraps an RPN lexeme sequence together with its infix source text.
    ///
    /// The sequence is not checked here; the resolver only builds well-formed
    /// ones, and the evaluator reports any other shape as an internal error.
    #[must_use]
    pub fn new(lexemes: Vec<Lexeme>, text: String) -> Self {
        let short_circuits = short_circuits(&lexemes).into();
        Self { lexemes: lexemes.into(),
               text,
               short_circuits }
    }

    /// The index of the `&&` or `||` whose right operand starts at `index`.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::{BinaryOperator, Lexeme, Operator, PostfixNotation},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let operand = Lexeme::Constant(Value::Boolean(true));
    /// let and = Lexeme::Operator(Operator::Binary(BinaryOperator::And));
    /// let not_equal = Lexeme::Operator(Operator::Binary(BinaryOperator::NotEqual));
    ///
    /// // true && true != true
    /// let notation = PostfixNotation::new(vec![operand.clone(),
    ///                                          operand.clone(),
    ///                                          operand,
    ///                                          not_equal,
    ///                                          and],
    ///                                     "true && true != true".to_string());
    /// assert_eq!(notation.short_circuit_at(1), Some(4));
    /// assert_eq!(notation.short_circuit_at(2), None);
    /// ```
    #[must_use]
    pub fn short_circuit_at(&self, index: usize) -> Option<usize> {
        self.short_circuits.get(index).copied().flatten()
    }

    /// Lexemes in postfix order.
    #[must_use]
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// The infix text the notation was built from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The postfix order rendered as space separated lexemes.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::{BinaryOperator, Lexeme, Operator, PostfixNotation},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let notation =
    ///     PostfixNotation::new(vec![Lexeme::Constant(Value::Integer(1)),
    ///                               Lexeme::Constant(Value::Integer(2)),
    ///                               Lexeme::Operator(Operator::Binary(BinaryOperator::Add))],
    ///                          "1 + 2".to_string());
    /// assert_eq!(notation.rpn(), "1 2 +");
    /// ```
    #[must_use]
    pub fn rpn(&self) -> String {
        self.lexemes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Maps the first lexeme of every `&&`/`||` right operand to the operator.
///
/// Tracks the start index of each operand on a stack while replaying the
/// sequence. A malformed sequence stops the scan; the evaluator reports it.
fn short_circuits(lexemes: &[Lexeme]) -> Vec<Option<usize>> {
    let mut targets = vec![None; lexemes.len()];
    let mut starts: Vec<usize> = Vec::new();

    for (index, lexeme) in lexemes.iter().enumerate() {
        match lexeme {
            Lexeme::Operator(Operator::Unary(_)) => {
                if starts.is_empty() {
                    break;
                }
            },
            Lexeme::Operator(Operator::Binary(op)) => {
                let (Some(right), Some(left)) = (starts.pop(), starts.pop()) else {
                    break;
                };
                if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
                    targets[right] = Some(index);
                }
                starts.push(left);
            },
            _ => starts.push(index),
        }
    }

    targets
}
