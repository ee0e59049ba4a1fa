/// Binary operator calculators.
///
/// Pure calculators over evaluated values for every binary operator, plus the
/// lazy handling of assignment and the short-circuit connectives.
pub mod binary;

/// Unary operator calculators, including the `++`/`--` step on variables.
pub mod unary;

/// The interpreter, its runtime state and control-flow outcomes.
pub mod core;

/// Lazily evaluated operands.
pub mod operand;

/// The postfix stack machine.
pub mod postfix;

/// Evaluation of every expression variant.
pub mod expression;

/// Statement dispatch, conditionals, switches and `println`.
pub mod statement;

/// `while`, `do`-`while` and `for` loops.
pub mod loops;

/// Function calls and the program entry point.
pub mod function;

/// Scope handling and other helpers shared by evaluation logic.
pub mod utils;
