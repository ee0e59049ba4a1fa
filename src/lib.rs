//! # sprig
//!
//! sprig is an interpreter for a small imperative scripting language written
//! in Rust. Source text is tokenized, statements are read into operations,
//! infix expressions are resolved into postfix order, and the resulting
//! program is executed by a tree-walking interpreter.
//!
//! The language has integers, doubles, booleans, strings and `null`;
//! variables and constants with block scoping; `if`, `while`, `do`-`while`,
//! `for` and `switch` statements; and user-defined functions starting at
//! `main()`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::{Interpreter, Settings},
        lexer::tokenize,
        parser::core::Reader,
    },
};

/// Defines the structure of compiled code.
///
/// This module declares the operators, lexemes, expressions and operations
/// that represent a program after reading. Expressions are kept in resolved
/// form, either as a single operand or as a postfix sequence; operations form
/// nested blocks.
///
/// # Responsibilities
/// - Defines operator enums with their precedence and associativity.
/// - Defines expression, operation and program types for all language
///   constructs.
/// - Attaches module and line locations for error reporting.
pub mod ast;
/// Provides unified error types for compilation and execution.
///
/// This module defines all errors that can be raised while tokenizing,
/// reading or executing code. Every user-facing error carries the module and
/// line it refers to.
///
/// # Responsibilities
/// - Defines syntax, runtime and internal error types.
/// - Renders errors as `module:line: message`.
/// - Combines them into one crate-level [`Error`](crate::error::Error).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenizing, expression resolution, statement
/// reading, evaluation and scoping to provide a complete runtime for source
/// code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, resolver, reader, evaluator,
///   and value types.
/// - Provides entry points for compiling and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers for numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64` in one place.
/// - Reduce shift distances to the width of a 64 bit integer.
pub mod util;

/// Compiles source text into a program.
///
/// # Parameters
/// - `source`: The program text.
/// - `module`: Module name used in error locations.
///
/// # Errors
/// Returns a syntax error for invalid tokens, statements or expressions.
///
/// # Examples
/// ```
/// let program = sprig::compile("fun main() {\n println \"hi\"\n}", "hello").unwrap();
/// assert_eq!(&*program.module, "hello");
///
/// let error = sprig::compile("fun main() {\n println (1 + \n}", "broken").unwrap_err();
/// assert!(error.to_string().starts_with("broken:"));
/// ```
pub fn compile(source: &str, module: &str) -> Result<Program, Error> {
    let tokens = tokenize(source, module)?;
    tracing::debug!(module, tokens = tokens.len(), "tokenized");
    Ok(Reader::new(&tokens, module).read_program()?)
}

/// Compiles and runs a program, writing `println` output to `output`.
///
/// The output sink is handed back once `main()` has finished.
///
/// # Examples
/// ```
/// let source = "fun main() {\n for (var i = 0; i < 3; i++) {\n println i\n }\n}";
/// let output = sprig::run_source(source, "count", Vec::new()).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "0\n1\n2\n");
///
/// let error = sprig::run_source("fun main() {\n println 1 / 0\n}", "div", Vec::new()).unwrap_err();
/// assert_eq!(error.to_string(), "div:2: / by zero");
/// ```
pub fn run_source<W: Write>(source: &str, module: &str, output: W) -> Result<W, Error> {
    run_with_settings(source, module, output, Settings::default())
}

/// Like [`run_source`], with explicit interpreter settings.
pub fn run_with_settings<W: Write>(source: &str,
                                   module: &str,
                                   output: W,
                                   settings: Settings)
                                   -> Result<W, Error> {
    let program = compile(source, module)?;
    let mut interpreter = Interpreter::new(output, settings);
    interpreter.invoke_main(&program)?;
    Ok(interpreter.into_output())
}
