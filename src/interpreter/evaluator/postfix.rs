use std::io::Write;

use crate::{
    ast::{Lexeme, Operator, PostfixNotation, Variable},
    error::InternalError,
    interpreter::{
        evaluator::{
            binary::logic::decided_by,
            core::{EvalResult, Interpreter},
            operand::Operand,
        },
        value::core::Value,
    },
};

/// An entry of the operand stack: a lexeme not yet evaluated, or the result
/// of an operator that has already been applied.
enum StackItem<'a> {
    Pending(&'a Lexeme),
    Ready(Value),
}

impl Operand for StackItem<'_> {
    fn evaluate<W: Write>(&self, interpreter: &mut Interpreter<W>) -> EvalResult<Value> {
        match self {
            Self::Pending(lexeme) => lexeme.evaluate(interpreter),
            Self::Ready(value) => Ok(value.clone()),
        }
    }

    fn variable(&self) -> Option<&Variable> {
        match self {
            Self::Pending(lexeme) => lexeme.variable(),
            Self::Ready(_) => None,
        }
    }
}

impl<W: Write> Interpreter<W> {
    /// Replays a postfix sequence on an operand stack.
    ///
    /// Operands are pushed unevaluated. Each operator pops its operands, hands
    /// them to its calculator, and pushes the computed value. Exactly one
    /// operand must remain at the end, and it is evaluated last.
    ///
    /// Before the right operand of `&&` or `||` is replayed, the left operand
    /// is evaluated. When it decides the result, the lexemes up to and
    /// including the operator are skipped.
    ///
    /// # Errors
    /// - Runtime errors raised by calculators or variable access.
    /// - `InternalError::OperandUnderflow` or `InternalError::PostfixResidue`
    ///   for malformed sequences.
    ///
    /// # Example
    /// ```
    /// use sprig::{
    ///     ast::{BinaryOperator, Lexeme, Operator, PostfixNotation},
    ///     error::Error,
    ///     interpreter::{
    ///         evaluator::core::{Interpreter, Settings},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new(), Settings::default());
    /// let one = Lexeme::Constant(Value::Integer(1));
    /// let add = Lexeme::Operator(Operator::Binary(BinaryOperator::Add));
    ///
    /// let valid = PostfixNotation::new(vec![one.clone(), one.clone(), add.clone()], "1 + 1".into());
    /// assert_eq!(interpreter.evaluate_postfix(&valid).unwrap(), Value::Integer(2));
    ///
    /// let malformed = PostfixNotation::new(vec![one, add.clone(), add], "+ 1 +".into());
    /// assert!(matches!(interpreter.evaluate_postfix(&malformed), Err(Error::Internal(_))));
    /// ```
    pub fn evaluate_postfix(&mut self, notation: &PostfixNotation) -> EvalResult<Value> {
        let lexemes = notation.lexemes();
        let mut stack: Vec<StackItem<'_>> = Vec::with_capacity(lexemes.len());
        let mut index = 0;

        while let Some(lexeme) = lexemes.get(index) {
            if let Some(end) = notation.short_circuit_at(index)
               && let Some(Lexeme::Operator(Operator::Binary(op))) = lexemes.get(end)
            {
                let left = pop_operand(&mut stack, &lexemes[end], notation)?.evaluate(self)?;
                if let Some(result) = decided_by(*op, &left) {
                    stack.push(StackItem::Ready(result));
                    index = end + 1;
                    continue;
                }
                stack.push(StackItem::Ready(left));
            }

            match lexeme {
                Lexeme::Operator(Operator::Unary(op)) => {
                    let operand = pop_operand(&mut stack, lexeme, notation)?;
                    if op.as_step().is_some() {
                        return Err(InternalError::UnresolvedStep(op.to_string()).into());
                    }
                    let value = operand.evaluate(self)?;
                    stack.push(StackItem::Ready(self.calculate_unary(*op, &value)?));
                },
                Lexeme::Operator(Operator::Binary(op)) => {
                    let right = pop_operand(&mut stack, lexeme, notation)?;
                    let left = pop_operand(&mut stack, lexeme, notation)?;
                    stack.push(StackItem::Ready(self.apply_binary(*op, &left, &right)?));
                },
                operand => stack.push(StackItem::Pending(operand)),
            }
            index += 1;
        }

        match stack.pop() {
            Some(result) if stack.is_empty() => result.evaluate(self),
            residue => {
                let count = stack.len() + usize::from(residue.is_some());
                Err(InternalError::PostfixResidue { expression: notation.text().to_string(),
                                                    count }.into())
            },
        }
    }
}

fn pop_operand<'a>(stack: &mut Vec<StackItem<'a>>,
                   operator: &Lexeme,
                   notation: &PostfixNotation)
                   -> EvalResult<StackItem<'a>> {
    stack.pop().ok_or_else(|| {
                   InternalError::OperandUnderflow { operator:   operator.to_string(),
                                                     expression: notation.text().to_string(), }.into()
               })
}
