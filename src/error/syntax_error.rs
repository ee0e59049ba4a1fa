use crate::ast::SourceLocation;

/// A compile-time error with the location it was found at.
///
/// Displays as `module:line: message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {kind}")]
pub struct SyntaxError {
    /// Module and line of the offending code.
    pub location: SourceLocation,
    /// What went wrong.
    pub kind:     SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates a syntax error for the given location.
    #[must_use]
    pub const fn new(location: SourceLocation, kind: SyntaxErrorKind) -> Self {
        Self { location, kind }
    }
}

/// Represents all errors that can occur during tokenizing, expression
/// resolution or statement reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that starts no token.
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(String),
    /// A `/*` comment without the closing `*/`.
    #[error("Block comment is not closed")]
    UnterminatedComment,
    /// A string literal without the closing quote.
    #[error("String literal is not closed")]
    UnterminatedString,
    /// A numeric literal that does not fit its type.
    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    /// A token that matches no lexeme category.
    #[error("Unknown token: '{0}'")]
    UnknownToken(String),
    /// A statement keyword used inside an expression.
    #[error("Reserved word '{0}' can not be used in an expression")]
    ReservedWord(String),
    /// `++` or `--` without an adjacent variable.
    #[error("A variable expression is expected for unary operator: '{0}'")]
    UnresolvedStepOperator(String),
    /// More closing than opening parentheses.
    #[error("Missing (")]
    MissingOpenParenthesis,
    /// More opening than closing parentheses.
    #[error("Missing )")]
    MissingCloseParenthesis,
    /// `?` with nothing before it.
    #[error("Ternary operator '?:' should have predicate clause expression")]
    TernaryPredicate,
    /// Nothing between `?` and `:`.
    #[error("Ternary operator '?:' should have true clause expression")]
    TernaryTrueClause,
    /// Nothing after `:`.
    #[error("Ternary operator '?:' should have false clause expression")]
    TernaryFalseClause,
    /// `?` without a matching `:`.
    #[error("Ternary operator '?:' should have ':' separator")]
    TernarySeparator,
    /// `:` without a preceding `?`.
    #[error("Ternary operator '?:' should have '?' before ':'")]
    TernaryQuestion,
    /// The first lexeme is a binary operator.
    #[error("Expression can not start with binary operator: '{0}'")]
    StartsWithBinaryOperator(String),
    /// The last lexeme is an operator.
    #[error("Expression can not end with operator: '{0}'")]
    EndsWithOperator(String),
    /// Two binary operators with no operand between them.
    #[error("Binary operators can not be adjacent: '{0}' '{1}'")]
    AdjacentBinaryOperators(String, String),
    /// Two operands with no operator between them.
    #[error("Operator is expected between '{0}' and '{1}'")]
    MissingOperator(String, String),
    /// A unary operator that is not followed by an operand.
    #[error("Unary operator '{0}' should be followed by an operand")]
    MissingUnaryOperand(String),
    /// An assignment whose left operand is not a variable.
    #[error("Assignment operator '{0}' requires a variable expression as its left operand")]
    AssignmentTarget(String),
    /// No lexemes where an expression was required.
    #[error("Expression is expected")]
    EmptyExpression,
    /// An invocation with an empty argument such as `f(1, )`.
    #[error("Function '{0}' has an empty argument")]
    EmptyArgument(String),

    /// A different token was required.
    #[error("Expected '{expected}' but found '{found}'")]
    Expected {
        /// The required token.
        expected: String,
        /// The token that was found instead.
        found:    String,
    },
    /// The source ended while a token was still required.
    #[error("Expected '{0}' but reached end of source")]
    UnexpectedEnd(String),
    /// A name that can not be used for a variable, constant or function.
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),
    /// Two functions with the same name.
    #[error("Function '{0}' is already defined")]
    DuplicateFunction(String),
    /// Two parameters of one function with the same name.
    #[error("Function '{function}' has duplicate parameter '{parameter}'")]
    DuplicateParameter {
        /// The function being declared.
        function:  String,
        /// The repeated parameter name.
        parameter: String,
    },
    /// A second `default` label in one switch.
    #[error("Switch can have only one default label")]
    DuplicateDefault,
    /// A statement that is only valid inside a function body.
    #[error("'{0}' is not expected at top level")]
    NotAllowedAtTopLevel(String),
    /// A `const` declaration without a value.
    #[error("Constant '{0}' should be initialized")]
    MissingInitializer(String),
}
