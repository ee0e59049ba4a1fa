use std::io::Write;

use crate::{
    ast::{
        BinaryOperator, Block, CaseLabel, ConditionalBlock, Expression, Operation, OperationKind,
        SwitchCase, Variable,
    },
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes the operations of a block in the current scope.
    ///
    /// Execution stops at the first operation that does not complete
    /// normally, and its [`Flow`] is returned to the caller.
    ///
    /// # Parameters
    /// - `block`: The operations to run.
    ///
    /// # Returns
    /// `Flow::Normal` when every operation completed, otherwise the outcome
    /// that ended the block.
    pub fn interpret(&mut self, block: &Block) -> EvalResult<Flow> {
        for operation in &block.operations {
            let flow = self.execute(operation)?;
            if flow != Flow::Normal {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single operation.
    pub fn execute(&mut self, operation: &Operation) -> EvalResult<Flow> {
        self.runtime.location = operation.location.clone();

        match &operation.kind {
            OperationKind::Declaration { name, value, constant } => {
                self.declare(name, value.as_ref(), *constant)?;
                Ok(Flow::Normal)
            },
            OperationKind::Expression(expression) | OperationKind::Invocation(expression) => {
                self.evaluate(expression)?;
                Ok(Flow::Normal)
            },
            OperationKind::Println(value) => {
                self.println(value.as_ref())?;
                Ok(Flow::Normal)
            },
            OperationKind::If { branches, otherwise } => {
                self.execute_if(branches, otherwise.as_ref())
            },
            OperationKind::While { condition, body } => self.execute_while(condition, body),
            OperationKind::DoWhile { body, condition } => self.execute_do_while(body, condition),
            OperationKind::For { initializer,
                                 condition,
                                 update,
                                 body, } => {
                self.execute_for(initializer.as_deref(), condition.as_ref(), update.as_ref(), body)
            },
            OperationKind::Switch { subject, cases } => self.execute_switch(subject, cases),
            OperationKind::Break => Ok(Flow::Break),
            OperationKind::Continue => Ok(Flow::Continue),
            OperationKind::Return(value) => {
                let value = match value {
                    Some(expression) => self.evaluate(expression)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            OperationKind::Block(block) => self.with_child_scope(|inner| inner.interpret(block)),
        }
    }

    /// Declares a variable or constant in the current scope.
    ///
    /// The initializer is evaluated before the name is bound, so it can not
    /// refer to the name being declared.
    fn declare(&mut self,
               name: &Variable,
               value: Option<&Expression>,
               constant: bool)
               -> EvalResult<()> {
        let value = match value {
            Some(expression) => self.evaluate(expression)?,
            None => Value::Null,
        };
        let scopes = &mut self.runtime.scopes;
        let declared = if constant {
            scopes.declare_constant(name, value)
        } else {
            scopes.declare_variable(name, value)
        };
        declared.map_err(|kind| self.runtime_error(kind))
    }

    fn println(&mut self, value: Option<&Expression>) -> EvalResult<()> {
        let text = match value {
            Some(expression) => self.evaluate(expression)?.to_string(),
            None => String::new(),
        };
        writeln!(self.output, "{text}").map_err(|e| {
                                           self.runtime_error(RuntimeErrorKind::Output(e.to_string()))
                                       })
    }

    /// Runs the first branch whose condition holds, or the `else` block.
    fn execute_if(&mut self,
                  branches: &[ConditionalBlock],
                  otherwise: Option<&Block>)
                  -> EvalResult<Flow> {
        for branch in branches {
            if self.condition("if", &branch.condition)? {
                return self.with_child_scope(|inner| inner.interpret(&branch.body));
            }
        }
        match otherwise {
            Some(block) => self.with_child_scope(|inner| inner.interpret(block)),
            None => Ok(Flow::Normal),
        }
    }

    /// Runs a switch statement.
    ///
    /// The subject is evaluated once. Execution starts at the first case
    /// whose label equals the subject, or at `default` when none does, and
    /// falls through the following cases until a `break`. All cases share
    /// one scope. `continue` and `return` leave the switch unchanged.
    fn execute_switch(&mut self, subject: &Expression, cases: &[SwitchCase]) -> EvalResult<Flow> {
        let subject = self.evaluate(subject)?;

        let mut start = None;
        for (index, case) in cases.iter().enumerate() {
            if let CaseLabel::Case(label) = &case.label {
                let label = self.evaluate(label)?;
                if self.calculate_binary(BinaryOperator::Equal, &subject, &label)?
                   == Value::Boolean(true)
                {
                    start = Some(index);
                    break;
                }
            }
        }
        let start = start.or_else(|| {
                             cases.iter()
                                  .position(|case| case.label == CaseLabel::Default)
                         });
        let Some(start) = start else {
            return Ok(Flow::Normal);
        };

        let flow = self.with_child_scope(|inner| {
                           for case in &cases[start..] {
                               let flow = inner.interpret(&case.body)?;
                               if flow != Flow::Normal {
                                   return Ok(flow);
                               }
                           }
                           Ok(Flow::Normal)
                       })?;

        Ok(match flow {
            Flow::Break => Flow::Normal,
            other => other,
        })
    }
}
