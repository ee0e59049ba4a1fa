/// The evaluator module executes compiled programs.
///
/// The evaluator walks operations and evaluates resolved expressions,
/// replaying postfix sequences on an operand stack. Control flow travels as
/// [`Flow`](crate::interpreter::evaluator::core::Flow) outcomes.
///
/// # Responsibilities
/// - Evaluates every expression form, with lazy `&&`, `||` and ternaries.
/// - Runs blocks, conditionals, loops, switches and function calls.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further reading.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each with its text and line. This is the first stage of compilation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, words, and operator symbols.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The resolver turns infix token sequences into evaluable expressions.
///
/// # Responsibilities
/// - Classifies tokens as operands, operators, parentheses and ternary marks.
/// - Disambiguates `++`/`--`, extracts ternaries and collapses invocations.
/// - Produces postfix order and validates the expression's structure.
pub mod resolver;
/// The parser module reads statements into operations.
///
/// The reader processes the token sequence produced by the lexer, recognizes
/// statements by their keywords, and hands expression tokens to the
/// resolver.
///
/// # Responsibilities
/// - Converts tokens into operations, blocks and function declarations.
/// - Validates statement grammar, reporting errors with location info.
/// - Decides where each expression ends.
pub mod parser;
/// Variable and constant scopes.
///
/// A chain of frames in an arena, addressed by index, with the global frame
/// at the root.
pub mod context;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements numeric promotion, equality and display forms.
pub mod value;
