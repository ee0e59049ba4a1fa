use crate::{
    ast::{
        BinaryOperator, Expression, Lexeme, Operator, Parenthesis, SourceLocation, TernaryMark,
        UnaryOperator, Variable,
    },
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::{
        lexer::{KEYWORDS, SourceToken, Token},
        resolver::ResolveResult,
        value::core::{Value, ValueType},
    },
};

/// Classifies a single token as a literal or a variable reference.
///
/// The resolver handles operators and punctuation itself and asks the
/// builder about every other token. Returning `None` makes the resolver
/// report the token as unknown.
pub trait TokenExpressionBuilder {
    /// Builds the expression a single token stands for.
    fn build(&self, token: &SourceToken) -> Option<Expression>;
}

/// The default single-token builder.
///
/// Recognizes type literals (`int`, `double`, `boolean`, `string`), `null`,
/// boolean, integer, double and string constants, and treats every other
/// identifier as a variable.
///
/// # Example
/// ```
/// use sprig::{
///     ast::Expression,
///     interpreter::{
///         lexer::tokenize,
///         resolver::lexeme_builder::{LiteralExpressionBuilder, TokenExpressionBuilder},
///         value::core::{Value, ValueType},
///     },
/// };
///
/// let tokens = tokenize("42 string null", "main").unwrap();
/// let builder = LiteralExpressionBuilder;
///
/// assert_eq!(builder.build(&tokens[0]), Some(Expression::Constant(Value::Integer(42))));
/// assert_eq!(builder.build(&tokens[1]), Some(Expression::TypeLiteral(ValueType::String)));
/// assert_eq!(builder.build(&tokens[2]), Some(Expression::Null));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralExpressionBuilder;

impl TokenExpressionBuilder for LiteralExpressionBuilder {
    fn build(&self, token: &SourceToken) -> Option<Expression> {
        match &token.token {
            Token::Integer(i) => Some(Expression::Constant(Value::Integer(*i))),
            Token::Double(d) => Some(Expression::Constant(Value::Double(*d))),
            Token::Str(s) => Some(Expression::Constant(Value::from(s.as_str()))),
            Token::Word(word) => Some(match word.as_str() {
                "true" => Expression::Constant(Value::Boolean(true)),
                "false" => Expression::Constant(Value::Boolean(false)),
                "null" => Expression::Null,
                _ => ValueType::from_keyword(word).map_or_else(|| {
                                                                   Expression::Variable(Variable::new(word))
                                                               },
                                                               Expression::TypeLiteral),
            }),
            _ => None,
        }
    }
}

/// Whether `word` can name a variable, constant or function.
///
/// # Example
/// ```
/// use sprig::interpreter::resolver::lexeme_builder::is_identifier;
///
/// assert!(is_identifier("total"));
/// assert!(!is_identifier("while"));
/// assert!(!is_identifier("int"));
/// assert!(!is_identifier("null"));
/// ```
#[must_use]
pub fn is_identifier(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
    && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    && !KEYWORDS.contains(&word)
    && !matches!(word, "true" | "false" | "null" | "typeof")
    && ValueType::from_keyword(word).is_none()
}

/// Converts one token into a lexeme.
///
/// `previous` holds the lexemes built so far for the same expression; a `+`
/// or `-` is unary when no operand can precede it.
///
/// # Errors
/// - `ReservedWord` for statement keywords.
/// - `InvalidNumber` for `9223372036854775808` without a leading unary minus.
/// - `UnknownToken` for tokens the builder does not recognize.
pub fn build_lexeme(builder: &dyn TokenExpressionBuilder,
                    token: &SourceToken,
                    previous: &[Lexeme],
                    location: &SourceLocation)
                    -> ResolveResult<Lexeme> {
    let error = |kind| SyntaxError::new(location.at_line(token.line), kind);

    match &token.token {
        Token::Symbol(symbol) => match symbol.as_str() {
            "(" => Ok(Lexeme::Parenthesis(Parenthesis::Open)),
            ")" => Ok(Lexeme::Parenthesis(Parenthesis::Close)),
            "?" => Ok(Lexeme::TernaryMark(TernaryMark::Question)),
            ":" => Ok(Lexeme::TernaryMark(TernaryMark::Colon)),
            "+" | "-" | "!" | "~" | "++" | "--"
                if !matches!(symbol.as_str(), "+" | "-") || expects_operand(previous) =>
            {
                UnaryOperator::from_symbol(symbol).map(|op| Lexeme::Operator(Operator::Unary(op)))
                                                  .ok_or_else(|| error(SyntaxErrorKind::UnknownToken(symbol.clone())))
            },
            _ => BinaryOperator::from_symbol(symbol).map(|op| Lexeme::Operator(Operator::Binary(op)))
                                                    .ok_or_else(|| error(SyntaxErrorKind::UnknownToken(symbol.clone()))),
        },
        Token::Word(word) if word == "typeof" => {
            Ok(Lexeme::Operator(Operator::Binary(BinaryOperator::TypeOf)))
        },
        Token::Word(word) if KEYWORDS.contains(&word.as_str()) => {
            Err(error(SyntaxErrorKind::ReservedWord(word.clone())))
        },
        Token::Integer(i64::MIN)
            if !matches!(previous.last(), Some(Lexeme::Operator(Operator::Unary(UnaryOperator::Minus)))) =>
        {
            Err(error(SyntaxErrorKind::InvalidNumber(token.text.clone())))
        },
        _ => builder.build(token)
                    .map(Lexeme::from_expression)
                    .ok_or_else(|| error(SyntaxErrorKind::UnknownToken(token.text.clone()))),
    }
}

/// Whether the next lexeme has to start an operand.
///
/// A trailing `++`/`--` counts as a postfix operator when an operand comes
/// right before it, so `a++ - 1` keeps its binary minus.
fn expects_operand(previous: &[Lexeme]) -> bool {
    match previous {
        [] => true,
        [.., before, Lexeme::Operator(Operator::Unary(UnaryOperator::Increment | UnaryOperator::Decrement))] => {
            !(before.is_operand() || matches!(before, Lexeme::Parenthesis(Parenthesis::Close)))
        },
        [.., last] => matches!(last,
                               Lexeme::Operator(_)
                               | Lexeme::Parenthesis(Parenthesis::Open)
                               | Lexeme::TernaryMark(_)),
    }
}
