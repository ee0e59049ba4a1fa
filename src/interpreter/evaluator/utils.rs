use std::{io::Write, sync::atomic::Ordering};

use crate::{
    ast::{Expression, Variable},
    error::{Error, RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::ScopeId,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Wraps `kind` into a runtime error at the current location.
    #[must_use]
    pub fn runtime_error(&self, kind: RuntimeErrorKind) -> Error {
        RuntimeError::new(self.runtime.location.clone(), kind).into()
    }

    /// Runs `body` inside a new scope whose parent is `parent`.
    ///
    /// The previous scope and location are restored on every exit path,
    /// whether `body` returns normally, with a control-flow outcome, or with
    /// an error.
    ///
    /// # Parameters
    /// - `parent`: The scope the new frame reads through to.
    /// - `body`: Evaluation to run in the new scope.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::Variable,
    ///     interpreter::{
    ///         evaluator::core::{Interpreter, Settings},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new(), Settings::default());
    /// let global = interpreter.context().global();
    ///
    /// let result = interpreter.with_scope(global, |inner| {
    ///     inner.context_mut()
    ///          .declare_variable(&Variable::new("tmp"), Value::Integer(1))
    ///          .unwrap();
    ///     inner.read_variable("missing")
    /// });
    ///
    /// assert!(result.is_err());
    /// assert!(!interpreter.context().is_defined("tmp"));
    /// ```
    pub fn with_scope<T>(&mut self,
                         parent: ScopeId,
                         body: impl FnOnce(&mut Self) -> EvalResult<T>)
                         -> EvalResult<T> {
        let location = self.runtime.location.clone();
        let previous = self.runtime.scopes.enter(parent);
        let result = body(self);
        self.runtime.scopes.leave(previous);
        self.runtime.location = location;
        result
    }

    /// Runs `body` in a child of the current scope.
    pub fn with_child_scope<T>(&mut self,
                               body: impl FnOnce(&mut Self) -> EvalResult<T>)
                               -> EvalResult<T> {
        let current = self.runtime.scopes.current();
        self.with_scope(current, body)
    }

    /// Reads a variable or constant.
    pub fn read_variable(&self, name: &str) -> EvalResult<Value> {
        self.runtime
            .scopes
            .read(name)
            .map_err(|kind| self.runtime_error(kind))
    }

    /// Writes the nearest binding of a variable.
    pub fn write_variable(&mut self, variable: &Variable, value: Value) -> EvalResult<()> {
        self.runtime
            .scopes
            .write(variable, value)
            .map_err(|kind| self.runtime_error(kind))
    }

    /// Evaluates a statement condition, which must be a boolean.
    pub(crate) fn condition(&mut self,
                            construct: &'static str,
                            condition: &Expression)
                            -> EvalResult<bool> {
        let value = self.evaluate(condition)?;
        value.as_boolean().ok_or_else(|| {
                              self.runtime_error(RuntimeErrorKind::NonBooleanCondition {
                                  construct,
                                  found: value.value_type(),
                              })
                          })
    }

    /// Fails when the host has requested termination.
    pub(crate) fn check_interrupt(&self) -> EvalResult<()> {
        if self.runtime.interrupt.load(Ordering::Relaxed) {
            tracing::debug!(location = %self.runtime.location, "execution interrupted");
            return Err(self.runtime_error(RuntimeErrorKind::Interrupted));
        }
        Ok(())
    }
}
