/// The reader entry point.
///
/// Holds the token cursor shared by every reading routine and assembles a
/// whole module into a [`Program`](crate::ast::Program).
pub mod core;

/// Block and function declaration reading.
///
/// Reads brace-delimited operation sequences and `fun` declarations,
/// including their parameter lists.
pub mod block;

/// Statement reading.
///
/// Implements every statement form: declarations, `println`, conditionals,
/// loops, `switch`, the jump statements and expression statements.
pub mod statement;

/// Cursor helpers shared by the reading routines.
///
/// Provides expected-token checks, identifier validation, comma-separated
/// lists, and the rules deciding where an expression ends.
pub mod utils;
