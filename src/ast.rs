use std::{borrow::Borrow, fmt, rc::Rc};

/// Operators with their precedence and associativity.
///
/// Operators are compile-time constants. The precedence table here is consulted
/// by the postfix builder when deciding which operators to pop.
pub mod operator;
/// Lexemes, the classified units consumed by expression resolution.
pub mod lexeme;
/// Resolved expressions, including postfix notation.
pub mod expression;
/// Statements, blocks, functions and whole programs.
pub mod operation;

pub use expression::{Expression, PostfixNotation};
pub use lexeme::{Lexeme, Parenthesis, TernaryMark};
pub use operation::{
    Block, CaseLabel, ConditionalBlock, Function, Operation, OperationKind, Program, SwitchCase,
};
pub use operator::{Associativity, BinaryOperator, Operator, StepOperator, UnaryOperator};

/// A position in the source: the module name and a one-based line number.
///
/// # Example
/// ```
/// use sprig::ast::SourceLocation;
///
/// let location = SourceLocation::new("main", 3);
/// assert_eq!(location.to_string(), "main:3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Name of the module the code belongs to.
    pub module: Rc<str>,
    /// One-based line number.
    pub line:   usize,
}

impl SourceLocation {
    /// Creates a location from a module name and a line.
    #[must_use]
    pub fn new(module: &str, line: usize) -> Self {
        Self { module: Rc::from(module),
               line }
    }

    /// Returns the same module at another line.
    #[must_use]
    pub fn at_line(&self, line: usize) -> Self {
        Self { module: Rc::clone(&self.module),
               line }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.line)
    }
}

/// A named variable handle.
///
/// The handle carries only the name; values live in the local context. Two
/// variables are equal exactly when their names are, so the handle is used
/// directly as a map key. Cloning is cheap and shares the name.
///
/// # Example
/// ```
/// use sprig::ast::Variable;
///
/// let a = Variable::new("count");
/// let b = Variable::new("count");
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "count");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Rc<str>);

impl Variable {
    /// Creates a variable handle for `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
