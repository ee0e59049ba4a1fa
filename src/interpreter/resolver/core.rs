use std::rc::Rc;

use crate::{
    ast::{Expression, Lexeme, PostfixNotation, SourceLocation},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::{
        lexer::{SourceToken, Token},
        resolver::{
            ResolveResult,
            ambiguity::resolve_step_operators,
            lexeme_builder::{
                LiteralExpressionBuilder, TokenExpressionBuilder, build_lexeme, is_identifier,
            },
            postfix::to_postfix,
            ternary::extract_ternaries,
            validation::{check_adjacency, check_shape},
        },
    },
};

/// Converts infix token or lexeme sequences into evaluable expressions.
///
/// Resolution runs in this order:
/// 1. function invocations `name(args)` are resolved and collapsed;
/// 2. tokens become lexemes;
/// 3. `++`/`--` are merged with their variables;
/// 4. ternaries are extracted into single operands;
/// 5. the shunting-yard algorithm produces postfix order;
/// 6. the infix sequence and the postfix shape are validated.
///
/// A single operand resolves to a simple expression; anything else becomes an
/// [`Expression::Postfix`].
///
/// # Example
/// ```
/// use sprig::{
///     ast::{Expression, SourceLocation},
///     interpreter::{lexer::tokenize, resolver::ExpressionResolver},
/// };
///
/// let resolver = ExpressionResolver::new();
/// let tokens = tokenize("7 - 2 * 3", "main").unwrap();
///
/// let Expression::Postfix(notation) =
///     resolver.resolve(&tokens, &SourceLocation::new("main", 1)).unwrap()
/// else {
///     panic!("expected a postfix expression")
/// };
/// assert_eq!(notation.rpn(), "7 2 3 * -");
/// assert_eq!(notation.text(), "7 - 2 * 3");
/// ```
#[derive(Clone)]
pub struct ExpressionResolver {
    builder: Rc<dyn TokenExpressionBuilder>,
}

impl Default for ExpressionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionResolver {
    /// Creates a resolver using the [`LiteralExpressionBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_builder(LiteralExpressionBuilder)
    }

    /// Creates a resolver that classifies single tokens with `builder`.
    #[must_use]
    pub fn with_builder(builder: impl TokenExpressionBuilder + 'static) -> Self {
        Self { builder: Rc::new(builder) }
    }

    /// Resolves a token sequence.
    ///
    /// # Errors
    /// Returns a `SyntaxError` at `location` (or at the offending token's
    /// line) when the tokens do not form a valid expression.
    pub fn resolve(&self,
                   tokens: &[SourceToken],
                   location: &SourceLocation)
                   -> ResolveResult<Expression> {
        let lexemes = self.build_lexemes(tokens, location)?;
        let text = tokens.iter()
                         .map(|t| t.text.as_str())
                         .collect::<Vec<_>>()
                         .join(" ");
        self.resolve_infix(lexemes, text, location)
    }

    /// Resolves an already built lexeme sequence.
    ///
    /// # Errors
    /// Returns a `SyntaxError` at `location` when the lexemes do not form a
    /// valid expression.
    pub fn resolve_lexemes(&self,
                           lexemes: Vec<Lexeme>,
                           location: &SourceLocation)
                           -> ResolveResult<Expression> {
        let text = lexemes.iter()
                          .map(ToString::to_string)
                          .collect::<Vec<_>>()
                          .join(" ");
        self.resolve_infix(lexemes, text, location)
    }

    fn resolve_infix(&self,
                     lexemes: Vec<Lexeme>,
                     text: String,
                     location: &SourceLocation)
                     -> ResolveResult<Expression> {
        let lexemes = resolve_step_operators(lexemes, location)?;
        let lexemes = extract_ternaries(self, lexemes, location)?;
        let postfix = to_postfix(lexemes.clone(), location)?;
        check_adjacency(&lexemes, location)?;
        check_shape(&postfix, location)?;

        if let [single] = postfix.as_slice()
           && let Some(expression) = single.clone().into_expression()
        {
            return Ok(expression);
        }

        let notation = PostfixNotation::new(postfix, text);
        tracing::trace!(%location, expression = notation.text(), rpn = %notation.rpn(),
                        "resolved postfix expression");
        Ok(Expression::Postfix(notation))
    }

    /// Builds lexemes, resolving function invocations into single operands.
    fn build_lexemes(&self,
                     tokens: &[SourceToken],
                     location: &SourceLocation)
                     -> ResolveResult<Vec<Lexeme>> {
        let mut lexemes = Vec::with_capacity(tokens.len());
        let mut index = 0;

        while let Some(token) = tokens.get(index) {
            if let Token::Word(name) = &token.token
               && is_identifier(name)
               && tokens.get(index + 1).is_some_and(|t| t.is_symbol("("))
            {
                let close = matching_parenthesis(tokens, index + 1).ok_or_else(|| {
                    SyntaxError::new(location.at_line(token.line),
                                     SyntaxErrorKind::MissingCloseParenthesis)
                })?;
                let arguments = self.resolve_arguments(name, &tokens[index + 2..close], location)?;
                let invocation = Expression::FunctionInvocation { name: Rc::from(name.as_str()),
                                                                  arguments };
                lexemes.push(Lexeme::Expression(Box::new(invocation)));
                index = close + 1;
                continue;
            }

            let lexeme = build_lexeme(self.builder.as_ref(), token, &lexemes, location)?;
            lexemes.push(lexeme);
            index += 1;
        }

        Ok(lexemes)
    }

    /// Splits an argument list at its top-level commas and resolves each part.
    fn resolve_arguments(&self,
                         function: &str,
                         tokens: &[SourceToken],
                         location: &SourceLocation)
                         -> ResolveResult<Vec<Expression>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut arguments = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (index, token) in tokens.iter().enumerate() {
            if token.is_symbol("(") {
                depth += 1;
            } else if token.is_symbol(")") {
                depth = depth.saturating_sub(1);
            } else if token.is_symbol(",") && depth == 0 {
                arguments.push(self.resolve_argument(function, &tokens[start..index], location)?);
                start = index + 1;
            }
        }
        arguments.push(self.resolve_argument(function, &tokens[start..], location)?);

        Ok(arguments)
    }

    fn resolve_argument(&self,
                        function: &str,
                        tokens: &[SourceToken],
                        location: &SourceLocation)
                        -> ResolveResult<Expression> {
        match tokens.first() {
            Some(first) => self.resolve(tokens, &location.at_line(first.line)),
            None => Err(SyntaxError::new(location.clone(),
                                         SyntaxErrorKind::EmptyArgument(function.to_string()))),
        }
    }
}

fn matching_parenthesis(tokens: &[SourceToken], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        if token.is_symbol("(") {
            depth += 1;
        } else if token.is_symbol(")") {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}
