use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expression, Function, Program},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

/// Name of the function a program starts at.
pub const MAIN_FUNCTION: &str = "main";

impl<W: Write> Interpreter<W> {
    /// Makes a function callable by name, replacing any earlier definition.
    pub fn define_function(&mut self, function: Rc<Function>) {
        self.functions.insert(Rc::clone(&function.name), function);
    }

    /// Calls a user-defined function.
    ///
    /// Arguments are evaluated left to right in the caller's scope. The body
    /// then runs in a fresh scope whose parent is the global scope, with each
    /// parameter bound to its argument.
    ///
    /// # Parameters
    /// - `name`: The called function.
    /// - `arguments`: Argument expressions, one per parameter.
    ///
    /// # Returns
    /// The value given to `return`, or `null` when the body ends without one.
    ///
    /// # Errors
    /// - `UndefinedFunction` or `ArgumentCount` for a bad call.
    /// - `CallDepthExceeded` when calls nest deeper than the configured limit.
    /// - `UnexpectedControl` when `break` or `continue` escapes the body.
    pub fn call_function(&mut self, name: &str, arguments: &[Expression]) -> EvalResult<Value> {
        self.check_interrupt()?;

        let Some(function) = self.functions.get(name).cloned() else {
            return Err(self.runtime_error(RuntimeErrorKind::UndefinedFunction(name.to_string())));
        };
        if function.parameters.len() != arguments.len() {
            return Err(self.runtime_error(RuntimeErrorKind::ArgumentCount {
                function: name.to_string(),
                expected: function.parameters.len(),
                found:    arguments.len(),
            }));
        }

        let values = arguments.iter()
                              .map(|argument| self.evaluate(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        if self.runtime.call_depth >= self.settings.max_call_depth {
            return Err(self.runtime_error(RuntimeErrorKind::CallDepthExceeded(
                self.settings.max_call_depth,
            )));
        }

        tracing::debug!(function = name, depth = self.runtime.call_depth + 1, "call");
        self.runtime.call_depth += 1;
        let global = self.runtime.scopes.global();
        let result = self.with_scope(global, |inner| {
                             inner.runtime.location = function.location.clone();
                             for (parameter, value) in function.parameters.iter().zip(values) {
                                 inner.runtime
                                      .scopes
                                      .declare_variable(parameter, value)
                                      .map_err(|kind| inner.runtime_error(kind))?;
                             }
                             let flow = inner.interpret(&function.body)?;
                             inner.finish_call(flow)
                         });
        self.runtime.call_depth -= 1;

        let value = result?;
        tracing::trace!(function = name, result = %value, "return");
        Ok(value)
    }

    /// Runs a compiled program.
    ///
    /// Functions are registered first, then global declarations run in the
    /// global scope, then `main()` is called.
    ///
    /// # Example
    /// ```
    /// use sprig::interpreter::{
    ///     evaluator::core::{Interpreter, Settings},
    ///     value::core::Value,
    /// };
    ///
    /// let source = "const base = 40\nfun main() {\n return base + 2\n}";
    /// let program = sprig::compile(source, "doc").unwrap();
    ///
    /// let mut interpreter = Interpreter::new(Vec::new(), Settings::default());
    /// assert_eq!(interpreter.invoke_main(&program).unwrap(), Value::Integer(42));
    /// ```
    pub fn invoke_main(&mut self, program: &Program) -> EvalResult<Value> {
        for function in program.functions.values() {
            self.define_function(Rc::clone(function));
        }

        self.runtime.location = program.globals.location.clone();
        let flow = self.interpret(&program.globals)?;
        self.finish_call(flow)?;

        self.call_function(MAIN_FUNCTION, &[])
    }

    /// Converts the outcome of a function body into its result.
    ///
    /// Runs before the caller's location is restored, so an escaping
    /// `break` or `continue` is reported inside the function.
    fn finish_call(&self, flow: Flow) -> EvalResult<Value> {
        match flow {
            Flow::Normal => Ok(Value::Null),
            Flow::Return(value) => Ok(value),
            Flow::Break => Err(self.runtime_error(RuntimeErrorKind::UnexpectedControl("break"))),
            Flow::Continue => {
                Err(self.runtime_error(RuntimeErrorKind::UnexpectedControl("continue")))
            },
        }
    }
}
