/// The resolver entry point.
///
/// Turns a token or lexeme sequence into a resolved expression by running the
/// steps below in order and collapsing function invocations.
pub mod core;

/// Token to lexeme classification.
///
/// Recognizes operators, parentheses and ternary marks by their text and
/// delegates everything else to a pluggable single-token builder.
pub mod lexeme_builder;

/// Prefix and postfix `++`/`--` disambiguation.
pub mod ambiguity;

/// Ternary extraction.
///
/// Collapses every `?:` into one operand before postfix conversion.
pub mod ternary;

/// The shunting-yard conversion from infix to postfix order.
pub mod postfix;

/// Structural checks the shunting-yard algorithm can not make on its own.
pub mod validation;

pub use self::core::ExpressionResolver;

/// Result type used by every resolution step.
pub type ResolveResult<T> = Result<T, crate::error::SyntaxError>;
