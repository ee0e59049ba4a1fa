use crate::{
    ast::{Lexeme, Operator, Parenthesis, SourceLocation, TernaryMark},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::resolver::ResolveResult,
};

/// Checks the infix lexeme sequence for misplaced operators and operands.
///
/// Rejects an empty sequence, a leading binary operator, a trailing operator,
/// adjacent binary operators, adjacent operands, unary operators without an
/// operand, and empty parentheses. Ternary marks that survived extraction
/// are rejected as well.
///
/// # Example
/// ```
/// use sprig::{
///     ast::{BinaryOperator, Lexeme, Operator, SourceLocation},
///     error::SyntaxErrorKind,
///     interpreter::{resolver::validation::check_adjacency, value::core::Value},
/// };
///
/// let lexemes = [Lexeme::Constant(Value::Integer(1)),
///                Lexeme::Operator(Operator::Binary(BinaryOperator::Add))];
/// let error = check_adjacency(&lexemes, &SourceLocation::new("main", 1)).unwrap_err();
///
/// assert_eq!(error.kind, SyntaxErrorKind::EndsWithOperator("+".to_string()));
/// ```
pub fn check_adjacency(lexemes: &[Lexeme], location: &SourceLocation) -> ResolveResult<()> {
    let error = |kind| Err(SyntaxError::new(location.clone(), kind));

    let (Some(first), Some(last)) = (lexemes.first(), lexemes.last()) else {
        return error(SyntaxErrorKind::EmptyExpression);
    };
    if let Lexeme::Operator(Operator::Binary(op)) = first {
        return error(SyntaxErrorKind::StartsWithBinaryOperator(op.to_string()));
    }
    if let Lexeme::Operator(op) = last {
        return error(SyntaxErrorKind::EndsWithOperator(op.to_string()));
    }

    for lexeme in lexemes {
        match lexeme {
            Lexeme::TernaryMark(TernaryMark::Question) => {
                return error(SyntaxErrorKind::TernarySeparator);
            },
            Lexeme::TernaryMark(TernaryMark::Colon) => {
                return error(SyntaxErrorKind::TernaryQuestion);
            },
            _ => {},
        }
    }

    for pair in lexemes.windows(2) {
        let [left, right] = pair else { continue };
        match (left, right) {
            (Lexeme::Operator(Operator::Binary(a)), Lexeme::Operator(Operator::Binary(b))) => {
                return error(SyntaxErrorKind::AdjacentBinaryOperators(a.to_string(),
                                                                      b.to_string()));
            },
            (Lexeme::Operator(Operator::Unary(op)),
             Lexeme::Operator(Operator::Binary(_)) | Lexeme::Parenthesis(Parenthesis::Close)) => {
                return error(SyntaxErrorKind::MissingUnaryOperand(op.to_string()));
            },
            (Lexeme::Operator(Operator::Binary(op)), Lexeme::Parenthesis(Parenthesis::Close)) => {
                return error(SyntaxErrorKind::EndsWithOperator(op.to_string()));
            },
            (Lexeme::Parenthesis(Parenthesis::Open), Lexeme::Operator(Operator::Binary(op))) => {
                return error(SyntaxErrorKind::StartsWithBinaryOperator(op.to_string()));
            },
            (Lexeme::Parenthesis(Parenthesis::Open), Lexeme::Parenthesis(Parenthesis::Close)) => {
                return error(SyntaxErrorKind::EmptyExpression);
            },
            (left, right) if ends_operand(left) && starts_operand(right) => {
                return error(SyntaxErrorKind::MissingOperator(left.to_string(),
                                                              right.to_string()));
            },
            _ => {},
        }
    }

    Ok(())
}

/// Simulates evaluation of a postfix sequence on operand shapes.
///
/// Every assignment operator must find a variable as its left operand, and
/// the sequence must reduce to exactly one operand.
///
/// # Errors
/// - `AssignmentTarget` for an assignment to anything but a variable.
/// - `EmptyExpression` when operands are missing or left over.
pub fn check_shape(postfix: &[Lexeme], location: &SourceLocation) -> ResolveResult<()> {
    let error = |kind| SyntaxError::new(location.clone(), kind);
    let mut is_variable: Vec<bool> = Vec::with_capacity(postfix.len());

    for lexeme in postfix {
        match lexeme {
            Lexeme::Operator(Operator::Unary(_)) => {
                is_variable.pop()
                           .ok_or_else(|| error(SyntaxErrorKind::EmptyExpression))?;
                is_variable.push(false);
            },
            Lexeme::Operator(Operator::Binary(op)) => {
                let (Some(_), Some(left)) = (is_variable.pop(), is_variable.pop()) else {
                    return Err(error(SyntaxErrorKind::EmptyExpression));
                };
                if op.is_assignment() && !left {
                    return Err(error(SyntaxErrorKind::AssignmentTarget(op.to_string())));
                }
                is_variable.push(false);
            },
            other => is_variable.push(matches!(other, Lexeme::Variable(_))),
        }
    }

    if is_variable.len() == 1 {
        Ok(())
    } else {
        Err(error(SyntaxErrorKind::EmptyExpression))
    }
}

fn ends_operand(lexeme: &Lexeme) -> bool {
    lexeme.is_operand() || matches!(lexeme, Lexeme::Parenthesis(Parenthesis::Close))
}

fn starts_operand(lexeme: &Lexeme) -> bool {
    lexeme.is_operand()
    || matches!(lexeme,
                Lexeme::Parenthesis(Parenthesis::Open) | Lexeme::Operator(Operator::Unary(_)))
}
