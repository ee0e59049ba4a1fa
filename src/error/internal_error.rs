/// A defect of the interpreter itself.
///
/// These errors mean a construct reached evaluation in a shape the resolver
/// should have rejected. They are never a mistake in the user's program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    /// A postfix sequence did not reduce to exactly one operand.
    #[error("Internal error: postfix expression '{expression}' left {count} operands on the stack")]
    PostfixResidue {
        /// Infix text of the expression.
        expression: String,
        /// Number of operands left over.
        count:      usize,
    },
    /// An operator found fewer operands on the stack than it needs.
    #[error("Internal error: operator '{operator}' is missing an operand in '{expression}'")]
    OperandUnderflow {
        /// The operator symbol.
        operator:   String,
        /// Infix text of the expression.
        expression: String,
    },
    /// A lexeme that has no value, such as a parenthesis, was evaluated.
    #[error("Internal error: lexeme '{0}' can not be evaluated")]
    UnexpectedLexeme(String),
    /// An assignment operator whose left operand is not a variable.
    #[error("Internal error: assignment operator '{0}' has no variable operand")]
    AssignmentTarget(String),
    /// `++` or `--` that was not merged with a variable.
    #[error("Internal error: step operator '{0}' was not resolved")]
    UnresolvedStep(String),
}
