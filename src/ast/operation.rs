use std::{collections::HashMap, rc::Rc};

use crate::ast::{Expression, SourceLocation, Variable};

/// One statement together with the line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// What the statement does.
    pub kind:     OperationKind,
    /// Where the statement starts.
    pub location: SourceLocation,
}

/// The statement kinds of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationKind {
    /// `var name = value` or `const name = value`.
    Declaration {
        /// The declared name.
        name:     Variable,
        /// Initial value; `null` when absent.
        value:    Option<Expression>,
        /// Whether the binding is write-once.
        constant: bool,
    },
    /// An expression evaluated for its effect, such as `x += 1` or `i++`.
    Expression(Expression),
    /// A function call whose result is discarded.
    Invocation(Expression),
    /// `println value`; an empty line when no value is given.
    Println(Option<Expression>),
    /// `if`, any number of `else if`, and an optional `else`.
    If {
        /// Conditions with their blocks, tested in order.
        branches:  Vec<ConditionalBlock>,
        /// Runs when no condition holds.
        otherwise: Option<Block>,
    },
    /// `while (condition) { body }`.
    While {
        /// Tested before every iteration.
        condition: Expression,
        /// The loop body.
        body:      Block,
    },
    /// `do { body } while (condition)`.
    DoWhile {
        /// The loop body, run at least once.
        body:      Block,
        /// Tested after every iteration.
        condition: Expression,
    },
    /// `for (initializer; condition; update) { body }`.
    For {
        /// Runs once in the loop's own scope.
        initializer: Option<Box<Operation>>,
        /// Tested before every iteration; absent means `true`.
        condition:   Option<Expression>,
        /// Runs after every iteration, including ones ended by `continue`.
        update:      Option<Expression>,
        /// The loop body.
        body:        Block,
    },
    /// `switch (subject) { case label: ... default: ... }`.
    Switch {
        /// Evaluated once.
        subject: Expression,
        /// Labels in source order.
        cases:   Vec<SwitchCase>,
    },
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `return` with an optional value.
    Return(Option<Expression>),
    /// A nested `{ ... }` block with its own scope.
    Block(Block),
}

/// A condition and the block it guards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBlock {
    /// Must evaluate to a boolean.
    pub condition: Expression,
    /// Runs when the condition is `true`.
    pub body:      Block,
}

/// A `case` or `default` label of a switch.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseLabel {
    /// `case value:`
    Case(Expression),
    /// `default:`
    Default,
}

/// A switch label with the statements up to the next label.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// The label.
    pub label: CaseLabel,
    /// Statements following the label.
    pub body:  Block,
}

/// An ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub operations: Vec<Operation>,
    /// Where the block starts.
    pub location:   SourceLocation,
}

impl Block {
    /// An empty block at `location`.
    #[must_use]
    pub const fn new(location: SourceLocation) -> Self {
        Self { operations: Vec::new(),
               location }
    }
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Name used at call sites.
    pub name:       Rc<str>,
    /// Parameters, bound positionally.
    pub parameters: Vec<Variable>,
    /// The function body.
    pub body:       Block,
    /// Where the function is declared.
    pub location:   SourceLocation,
}

/// A compiled module: its functions and its global declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Module name used in locations.
    pub module:    Rc<str>,
    /// Functions by name.
    pub functions: HashMap<Rc<str>, Rc<Function>>,
    /// Top-level declarations, run before `main`.
    pub globals:   Block,
}
