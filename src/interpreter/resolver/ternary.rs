use crate::{
    ast::{Expression, Lexeme, Operator, Parenthesis, SourceLocation, TernaryMark},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::resolver::{ExpressionResolver, ResolveResult},
};

/// Replaces the ternary operators of a lexeme sequence with ternary
/// expression operands.
///
/// Parenthesized groups that contain `?` or `:` are resolved on their own
/// first. Then the first remaining `?` is paired with its `:`. The predicate
/// runs back to the last assignment operator before the `?` (or to the
/// start), the true clause runs to the matching `:`, and the false clause runs
/// to the end. Each clause is resolved recursively, so clauses may contain
/// further ternaries.
///
/// # Errors
/// Any of the ternary `SyntaxErrorKind`s when a clause or separator is
/// missing, plus whatever resolving a clause reports.
pub fn extract_ternaries(resolver: &ExpressionResolver,
                         lexemes: Vec<Lexeme>,
                         location: &SourceLocation)
                         -> ResolveResult<Vec<Lexeme>> {
    let error = |kind| SyntaxError::new(location.clone(), kind);
    let mut lexemes = collapse_groups(resolver, lexemes, location)?;

    let Some(question) = find_top_level(&lexemes, TernaryMark::Question) else {
        if find_top_level(&lexemes, TernaryMark::Colon).is_some() {
            return Err(error(SyntaxErrorKind::TernaryQuestion));
        }
        return Ok(lexemes);
    };

    let start = predicate_start(&lexemes[..question]);
    if start == question {
        return Err(error(SyntaxErrorKind::TernaryPredicate));
    }
    let colon = matching_colon(&lexemes, question).ok_or_else(|| {
                                                       error(SyntaxErrorKind::TernarySeparator)
                                                   })?;
    if colon == question + 1 {
        return Err(error(SyntaxErrorKind::TernaryTrueClause));
    }
    if colon + 1 == lexemes.len() {
        return Err(error(SyntaxErrorKind::TernaryFalseClause));
    }

    let on_false = lexemes.split_off(colon + 1);
    lexemes.truncate(colon);
    let on_true = lexemes.split_off(question + 1);
    lexemes.truncate(question);
    let predicate = lexemes.split_off(start);

    let ternary = Expression::Ternary { predicate: Box::new(resolver.resolve_lexemes(predicate,
                                                                                     location)?),
                                        on_true:   Box::new(resolver.resolve_lexemes(on_true,
                                                                                     location)?),
                                        on_false:  Box::new(resolver.resolve_lexemes(on_false,
                                                                                     location)?), };
    lexemes.push(Lexeme::Expression(Box::new(ternary)));

    Ok(lexemes)
}

/// Resolves every parenthesized group containing a ternary mark into a single
/// operand. Groups without one are kept as they are, and an unclosed `(` is
/// left for the postfix builder to report.
fn collapse_groups(resolver: &ExpressionResolver,
                   lexemes: Vec<Lexeme>,
                   location: &SourceLocation)
                   -> ResolveResult<Vec<Lexeme>> {
    if !lexemes.iter().any(|l| matches!(l, Lexeme::TernaryMark(_))) {
        return Ok(lexemes);
    }

    let mut output = Vec::with_capacity(lexemes.len());
    let mut index = 0;

    while index < lexemes.len() {
        if !matches!(lexemes[index], Lexeme::Parenthesis(Parenthesis::Open)) {
            output.push(lexemes[index].clone());
            index += 1;
            continue;
        }
        let Some(close) = matching_parenthesis(&lexemes, index) else {
            output.extend_from_slice(&lexemes[index..]);
            break;
        };
        let inner = &lexemes[index + 1..close];
        if inner.iter().any(|l| matches!(l, Lexeme::TernaryMark(_))) {
            let resolved = resolver.resolve_lexemes(inner.to_vec(), location)?;
            output.push(Lexeme::from_expression(resolved));
        } else {
            output.extend_from_slice(&lexemes[index..=close]);
        }
        index = close + 1;
    }

    Ok(output)
}

fn matching_parenthesis(lexemes: &[Lexeme], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, lexeme) in lexemes.iter().enumerate().skip(open) {
        match lexeme {
            Lexeme::Parenthesis(Parenthesis::Open) => depth += 1,
            Lexeme::Parenthesis(Parenthesis::Close) => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}

fn find_top_level(lexemes: &[Lexeme], mark: TernaryMark) -> Option<usize> {
    let mut depth = 0usize;
    lexemes.iter().position(|lexeme| {
                      match lexeme {
                          Lexeme::Parenthesis(Parenthesis::Open) => depth += 1,
                          Lexeme::Parenthesis(Parenthesis::Close) => {
                              depth = depth.saturating_sub(1);
                          },
                          Lexeme::TernaryMark(m) => return depth == 0 && *m == mark,
                          _ => {},
                      }
                      false
                  })
}

/// Index right after the last top-level assignment operator, or zero.
fn predicate_start(before_question: &[Lexeme]) -> usize {
    let mut depth = 0usize;
    let mut start = 0;
    for (index, lexeme) in before_question.iter().enumerate() {
        match lexeme {
            Lexeme::Parenthesis(Parenthesis::Open) => depth += 1,
            Lexeme::Parenthesis(Parenthesis::Close) => depth = depth.saturating_sub(1),
            Lexeme::Operator(Operator::Binary(op)) if depth == 0 && op.is_assignment() => {
                start = index + 1;
            },
            _ => {},
        }
    }
    start
}

/// The `:` pairing with the `?` at `question`, skipping nested pairs.
fn matching_colon(lexemes: &[Lexeme], question: usize) -> Option<usize> {
    let mut nested = 0usize;
    for (index, lexeme) in lexemes.iter().enumerate().skip(question + 1) {
        match lexeme {
            Lexeme::TernaryMark(TernaryMark::Question) => nested += 1,
            Lexeme::TernaryMark(TernaryMark::Colon) if nested == 0 => return Some(index),
            Lexeme::TernaryMark(TernaryMark::Colon) => nested -= 1,
            _ => {},
        }
    }
    None
}
