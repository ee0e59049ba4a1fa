use std::io::Write;

use crate::{
    ast::{Block, Expression, Operation},
    interpreter::evaluator::core::{EvalResult, Flow, Interpreter},
};

impl<W: Write> Interpreter<W> {
    /// Runs `while (condition) { body }`.
    pub(crate) fn execute_while(&mut self,
                                condition: &Expression,
                                body: &Block)
                                -> EvalResult<Flow> {
        while self.condition("while", condition)? {
            if let Some(flow) = self.run_iteration(body)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs `do { body } while (condition)`; the body runs at least once.
    pub(crate) fn execute_do_while(&mut self,
                                   body: &Block,
                                   condition: &Expression)
                                   -> EvalResult<Flow> {
        loop {
            if let Some(flow) = self.run_iteration(body)? {
                return Ok(flow);
            }
            if !self.condition("while", condition)? {
                return Ok(Flow::Normal);
            }
        }
    }

    /// Runs `for (initializer; condition; update) { body }`.
    ///
    /// The initializer runs once in a scope that lives as long as the loop,
    /// so variables it declares are visible to every iteration. A missing
    /// condition is `true`. The update also runs after `continue`.
    pub(crate) fn execute_for(&mut self,
                              initializer: Option<&Operation>,
                              condition: Option<&Expression>,
                              update: Option<&Expression>,
                              body: &Block)
                              -> EvalResult<Flow> {
        self.with_child_scope(|inner| {
                if let Some(initializer) = initializer {
                    inner.execute(initializer)?;
                }
                loop {
                    if let Some(condition) = condition
                       && !inner.condition("for", condition)?
                    {
                        return Ok(Flow::Normal);
                    }
                    if let Some(flow) = inner.run_iteration(body)? {
                        return Ok(flow);
                    }
                    if let Some(update) = update {
                        inner.evaluate(update)?;
                    }
                }
            })
    }

    /// Runs one loop iteration in a fresh child scope.
    ///
    /// Returns `None` when the loop should go on, or the flow the loop
    /// statement itself should complete with.
    fn run_iteration(&mut self, body: &Block) -> EvalResult<Option<Flow>> {
        self.check_interrupt()?;
        let flow = self.with_child_scope(|inner| inner.interpret(body))?;

        Ok(match flow {
            Flow::Normal | Flow::Continue => None,
            Flow::Break => Some(Flow::Normal),
            Flow::Return(value) => Some(Flow::Return(value)),
        })
    }
}
