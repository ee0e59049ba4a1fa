use crate::{
    ast::{Lexeme, Operator, Parenthesis, SourceLocation},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::resolver::ResolveResult,
};

/// Reorders an infix lexeme sequence into postfix order (shunting-yard).
///
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator that binds at least as tightly (see
/// [`Operator::should_pop`]); parentheses group and are discarded.
///
/// # Errors
/// - `MissingOpenParenthesis` when a `)` has no matching `(`.
/// - `MissingCloseParenthesis` when a `(` is never closed.
///
/// # Example
/// ```
/// use sprig::{
///     ast::{BinaryOperator, Lexeme, Operator, SourceLocation},
///     interpreter::{resolver::postfix::to_postfix, value::core::Value},
/// };
///
/// let int = |i| Lexeme::Constant(Value::Integer(i));
/// let op = |op| Lexeme::Operator(Operator::Binary(op));
///
/// let infix = vec![int(7), op(BinaryOperator::Subtract), int(2), op(BinaryOperator::Multiply), int(3)];
/// let postfix = to_postfix(infix, &SourceLocation::new("main", 1)).unwrap();
///
/// assert_eq!(postfix,
///            [int(7), int(2), int(3), op(BinaryOperator::Multiply), op(BinaryOperator::Subtract)]);
/// ```
pub fn to_postfix(lexemes: Vec<Lexeme>, location: &SourceLocation) -> ResolveResult<Vec<Lexeme>> {
    let error = |kind| SyntaxError::new(location.clone(), kind);
    let mut output = Vec::with_capacity(lexemes.len());
    let mut stack: Vec<Lexeme> = Vec::new();

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Operator(incoming) => {
                while let Some(Lexeme::Operator(top)) = stack.last()
                      && Operator::should_pop(*top, incoming)
                {
                    output.extend(stack.pop());
                }
                stack.push(Lexeme::Operator(incoming));
            },
            Lexeme::Parenthesis(Parenthesis::Open) => stack.push(lexeme),
            Lexeme::Parenthesis(Parenthesis::Close) => loop {
                match stack.pop() {
                    Some(Lexeme::Parenthesis(Parenthesis::Open)) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(error(SyntaxErrorKind::MissingOpenParenthesis)),
                }
            },
            operand => output.push(operand),
        }
    }

    while let Some(lexeme) = stack.pop() {
        if !matches!(lexeme, Lexeme::Operator(_)) {
            return Err(error(SyntaxErrorKind::MissingCloseParenthesis));
        }
        output.push(lexeme);
    }

    Ok(output)
}
