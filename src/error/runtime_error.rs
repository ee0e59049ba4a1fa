use crate::{ast::SourceLocation, interpreter::value::core::ValueType};

/// An error raised while executing a program.
///
/// The location is the one the interpreter was executing when the error
/// occurred. Displays as `module:line: message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct RuntimeError {
    /// Module and line that was executing.
    pub location: SourceLocation,
    /// What went wrong.
    pub kind:     RuntimeErrorKind,
}

impl RuntimeError {
    /// Creates a runtime error for the given location.
    #[must_use]
    pub const fn new(location: SourceLocation, kind: RuntimeErrorKind) -> Self {
        Self { location, kind }
    }
}

/// Represents all errors that can occur during evaluation and execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// Read or write of a name that is bound nowhere in the scope chain.
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),
    /// Write to a constant, or a declaration clashing with one.
    #[error("Constant '{0}' can not be changed")]
    ConstantReassignment(String),
    /// Declaration clashing with a reachable variable.
    #[error("Variable '{0}' with same name is already defined")]
    DuplicateVariable(String),
    /// A binary operator applied to values it does not support.
    #[error("Operator '{operator}' is not supported for types '{left}' and '{right}'")]
    UnsupportedOperands {
        /// The operator symbol.
        operator: String,
        /// Type of the left operand.
        left:     ValueType,
        /// Type of the right operand.
        right:    ValueType,
    },
    /// A unary operator applied to a value it does not support.
    #[error("Operator '{operator}' is not supported for type '{operand}'")]
    UnsupportedOperand {
        /// The operator symbol.
        operator: String,
        /// Type of the operand.
        operand:  ValueType,
    },
    /// Integer division or remainder with a zero divisor.
    #[error("/ by zero")]
    DivisionByZero,
    /// A ternary predicate that is not a boolean.
    #[error("Ternary predicate should be boolean but was '{0}'")]
    TernaryPredicate(ValueType),
    /// An `if` or loop condition that is not a boolean.
    #[error("{construct} condition should be boolean but was '{found}'")]
    NonBooleanCondition {
        /// The statement keyword.
        construct: &'static str,
        /// Type of the evaluated condition.
        found:     ValueType,
    },
    /// Call of a function that was never declared.
    #[error("Function '{0}' is not defined")]
    UndefinedFunction(String),
    /// Call with the wrong number of arguments.
    #[error("Function '{function}' expects {expected} arguments but got {found}")]
    ArgumentCount {
        /// The called function.
        function: String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// `break` or `continue` that escaped every construct handling it.
    #[error("'{0}' operation is not expected here")]
    UnexpectedControl(&'static str),
    /// Function calls nested deeper than the configured limit.
    #[error("Maximum call depth of {0} exceeded")]
    CallDepthExceeded(usize),
    /// The host requested termination.
    #[error("Execution was interrupted")]
    Interrupted,
    /// The output sink rejected a `println`.
    #[error("Failed to write output: {0}")]
    Output(String),
}
