use crate::{
    ast::{Expression, Lexeme, Operator, SourceLocation, StepOperator},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::resolver::ResolveResult,
};

/// Merges every `++`/`--` with its variable into one operand lexeme.
///
/// A step operator directly after a variable (not already merged) becomes a
/// postfix expression on that variable. Otherwise a variable directly after it
/// makes it a prefix expression. The merged lexeme takes the place of both
/// originals, so it later takes part in precedence climbing as a single
/// operand.
///
/// # Errors
/// `UnresolvedStepOperator` when neither neighbour is a variable.
///
/// # Example
/// ```
/// use sprig::{
///     ast::{Expression, Lexeme, Operator, SourceLocation, StepOperator, UnaryOperator, Variable},
///     interpreter::resolver::ambiguity::resolve_step_operators,
/// };
///
/// let a = Variable::new("a");
/// let lexemes = vec![Lexeme::Variable(a.clone()),
///                    Lexeme::Operator(Operator::Unary(UnaryOperator::Increment))];
///
/// let resolved = resolve_step_operators(lexemes, &SourceLocation::new("main", 1)).unwrap();
/// assert_eq!(resolved,
///            [Lexeme::Expression(Box::new(Expression::UnaryPostfix { operator: StepOperator::Increment,
///                                                                    variable: a }))]);
/// ```
pub fn resolve_step_operators(lexemes: Vec<Lexeme>,
                              location: &SourceLocation)
                              -> ResolveResult<Vec<Lexeme>> {
    let mut resolved: Vec<Lexeme> = Vec::with_capacity(lexemes.len());
    let mut input = lexemes.into_iter().peekable();

    while let Some(lexeme) = input.next() {
        let Some(operator) = step_operator(&lexeme) else {
            resolved.push(lexeme);
            continue;
        };

        if matches!(resolved.last(), Some(Lexeme::Variable(_)))
           && let Some(Lexeme::Variable(variable)) = resolved.pop()
        {
            resolved.push(Lexeme::Expression(Box::new(Expression::UnaryPostfix { operator,
                                                                                 variable })));
            continue;
        }

        if let Some(Lexeme::Variable(variable)) =
            input.next_if(|next| matches!(next, Lexeme::Variable(_)))
        {
            resolved.push(Lexeme::Expression(Box::new(Expression::UnaryPrefix { operator,
                                                                                variable })));
            continue;
        }

        return Err(SyntaxError::new(location.clone(),
                                    SyntaxErrorKind::UnresolvedStepOperator(operator.to_string())));
    }

    Ok(resolved)
}

fn step_operator(lexeme: &Lexeme) -> Option<StepOperator> {
    match lexeme {
        Lexeme::Operator(Operator::Unary(op)) => op.as_step(),
        _ => None,
    }
}
