use std::io::Write;

use crate::{
    ast::{Expression, StepOperator, Variable},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            unary::step,
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates an expression in the current scope.
    ///
    /// This is the central evaluation entry point. Simple expressions are
    /// handled directly; postfix sequences are replayed on the operand stack;
    /// function invocations run the called function to completion.
    ///
    /// # Parameters
    /// - `expression`: The expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating, such as an undefined
    /// variable or an unsupported operand type.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::{SourceLocation, Variable},
    ///     interpreter::{
    ///         evaluator::core::{Interpreter, Settings},
    ///         lexer::tokenize,
    ///         resolver::ExpressionResolver,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let location = SourceLocation::new("doc", 1);
    /// let tokens = tokenize("x > 2 ? \"big\" : \"small\"", "doc").unwrap();
    /// let expression = ExpressionResolver::new().resolve(&tokens, &location).unwrap();
    ///
    /// let mut interpreter = Interpreter::new(Vec::new(), Settings::default());
    /// interpreter.context_mut()
    ///            .declare_variable(&Variable::new("x"), Value::Integer(3))
    ///            .unwrap();
    ///
    /// assert_eq!(interpreter.evaluate(&expression).unwrap(), Value::from("big"));
    /// ```
    pub fn evaluate(&mut self, expression: &Expression) -> EvalResult<Value> {
        match expression {
            Expression::Null => Ok(Value::Null),
            Expression::Constant(value) => Ok(value.clone()),
            Expression::TypeLiteral(value_type) => Ok(Value::Type(*value_type)),
            Expression::Variable(variable) => self.read_variable(variable.name()),
            Expression::UnaryPrefix { operator, variable } => {
                self.step_variable(*operator, variable, true)
            },
            Expression::UnaryPostfix { operator, variable } => {
                self.step_variable(*operator, variable, false)
            },
            Expression::Ternary { predicate,
                                  on_true,
                                  on_false, } => self.evaluate_ternary(predicate, on_true, on_false),
            Expression::Postfix(notation) => self.evaluate_postfix(notation),
            Expression::FunctionInvocation { name, arguments } => {
                self.call_function(name, arguments)
            },
        }
    }

    /// Steps a variable by one and stores the result.
    ///
    /// Returns the new value for the prefix form and the old value for the
    /// postfix form.
    fn step_variable(&mut self,
                     op: StepOperator,
                     variable: &Variable,
                     prefix: bool)
                     -> EvalResult<Value> {
        let old = self.read_variable(variable.name())?;
        let new = step(op, &old).map_err(|kind| self.runtime_error(kind))?;
        self.write_variable(variable, new.clone())?;
        Ok(if prefix { new } else { old })
    }

    /// Evaluates the predicate, then exactly one of the two branches.
    fn evaluate_ternary(&mut self,
                        predicate: &Expression,
                        on_true: &Expression,
                        on_false: &Expression)
                        -> EvalResult<Value> {
        match self.evaluate(predicate)? {
            Value::Boolean(true) => self.evaluate(on_true),
            Value::Boolean(false) => self.evaluate(on_false),
            other => {
                Err(self.runtime_error(RuntimeErrorKind::TernaryPredicate(other.value_type())))
            },
        }
    }
}
