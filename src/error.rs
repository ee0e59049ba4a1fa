/// Syntax errors.
///
/// Defines every error that can occur while tokenizing source text, resolving
/// expressions or reading statements. Syntax errors always carry the module
/// and line they were found on and abort compilation of that module.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while a well-formed program is executing, such
/// as unbound variables, unsupported operand types, division by zero or calls
/// to undefined functions. The location is taken from the running interpreter.
pub mod runtime_error;
/// Internal errors.
///
/// Defects of the interpreter itself, such as a malformed postfix sequence.
/// They are never caused by a user mistake and are reported separately.
pub mod internal_error;

pub use internal_error::InternalError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
pub use syntax_error::{SyntaxError, SyntaxErrorKind};

/// Any failure produced while compiling or running a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be compiled.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The interpreter reached an inconsistent state.
    #[error(transparent)]
    Internal(#[from] InternalError),
}
