use std::{
    collections::HashMap,
    io::Write,
    rc::Rc,
    sync::{Arc, atomic::AtomicBool},
};

use crate::{
    ast::{Function, SourceLocation},
    error::Error,
    interpreter::{context::LocalContext, value::core::Value},
};

/// Result type used by the evaluator.
///
/// Evaluation fails with a runtime error for mistakes in the program and with
/// an internal error for defects of the interpreter.
pub type EvalResult<T> = Result<T, Error>;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// How control leaves a statement or block.
///
/// `break`, `continue` and `return` travel up as values of this type until a
/// construct that handles them is reached. They are never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop or switch.
    Break,
    /// Skip to the next iteration of the innermost loop.
    Continue,
    /// Leave the current function with a value.
    Return(Value),
}

/// Interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Calls nested deeper than this fail instead of exhausting the host
    /// stack.
    pub max_call_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// The mutable execution state of one program run.
///
/// Location and scope are swapped and restored around every nested block and
/// function call.
#[derive(Debug)]
pub struct Runtime {
    /// The statement currently executing.
    pub(crate) location:   SourceLocation,
    /// Variable and constant scopes.
    pub(crate) scopes:     LocalContext,
    /// Number of active function calls.
    pub(crate) call_depth: usize,
    /// Set by the host to stop the run at the next loop iteration or call.
    pub(crate) interrupt:  Arc<AtomicBool>,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the runtime, every declared
/// function, the settings, and the sink that `println` writes to.
///
/// ## Usage
///
/// An `Interpreter` runs one program. Independent runs need independent
/// interpreters; nothing is shared between them.
///
/// ```
/// use sprig::interpreter::evaluator::core::{Interpreter, Settings};
///
/// let program = sprig::compile("fun main() {\n println 6 * 7\n}", "answer").unwrap();
/// let mut interpreter = Interpreter::new(Vec::new(), Settings::default());
/// interpreter.invoke_main(&program).unwrap();
///
/// assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "42\n");
/// ```
pub struct Interpreter<W: Write> {
    pub(crate) runtime:   Runtime,
    pub(crate) functions: HashMap<Rc<str>, Rc<Function>>,
    pub(crate) settings:  Settings,
    pub(crate) output:    W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope and no functions.
    #[must_use]
    pub fn new(output: W, settings: Settings) -> Self {
        Self { runtime: Runtime { location:   SourceLocation::new("main", 0),
                                  scopes:     LocalContext::new(),
                                  call_depth: 0,
                                  interrupt:  Arc::new(AtomicBool::new(false)), },
               functions: HashMap::new(),
               settings,
               output }
    }

    /// A flag that stops the run when set.
    ///
    /// The flag is checked at every loop iteration and function call; the
    /// run then fails with `Execution was interrupted`.
    #[must_use]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.runtime.interrupt)
    }

    /// The statement currently executing.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.runtime.location
    }

    /// The variable and constant scopes.
    #[must_use]
    pub const fn context(&self) -> &LocalContext {
        &self.runtime.scopes
    }

    /// Mutable access to the scopes, for hosts that predefine globals.
    pub const fn context_mut(&mut self) -> &mut LocalContext {
        &mut self.runtime.scopes
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
