use logos::{FilterResult, Logos};

use crate::{
    ast::SourceLocation,
    error::{SyntaxError, SyntaxErrorKind},
};

/// Words that start statements and may not appear inside an expression.
pub const KEYWORDS: &[&str] = &["var", "const", "fun", "if", "else", "while", "do", "for",
                                 "switch", "case", "default", "break", "continue", "return",
                                 "println"];

/// Represents a lexical token in the source input.
///
/// Keywords, literals such as `true` or `null`, and type names are all
/// `Word`s; they are told apart by the statement reader and the lexeme
/// builder. Operators and punctuation share the `Symbol` variant and are
/// matched longest first, so `>>>=` is one token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literals, such as `3.14` or `2e10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_double)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_double)]
    Double(f64),
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literals with `\"`, `\\`, `\n` and `\t` escapes.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// Identifiers and keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// Operators and punctuation.
    #[regex(r">>>?=?|<<=?|[-+*/%&|^=!<>]=|&&|\|\||\+\+|--|[-+*/%&|^=!<>~?:(){},;]",
            |lex| lex.slice().to_string())]
    Symbol(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Block comments */`, which may span lines.
    #[token("/*", block_comment)]
    BlockComment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and for the statement
/// reader, which ends a statement at a line break.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token with its source text and line.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceToken {
    /// The classified token.
    pub token: Token,
    /// The exact source text of the token.
    pub text:  String,
    /// One-based line the token starts on.
    pub line:  usize,
}

impl SourceToken {
    /// Whether this token is the given operator or punctuation symbol.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(&self.token, Token::Symbol(s) if s == symbol)
    }

    /// Whether this token is the given word.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(&self.token, Token::Word(w) if w == word)
    }
}

/// Splits source text into tokens, dropping whitespace and comments.
///
/// # Errors
/// Fails on characters that start no token, unterminated block comments and
/// strings, and integer literals above `2^63`.
///
/// # Example
/// ```
/// use sprig::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("var x = 1 // one\nx += 2", "main").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["var", "x", "=", "1", "x", "+=", "2"]);
/// assert_eq!(tokens[4].line, 2);
/// ```
pub fn tokenize(source: &str, module: &str) -> Result<Vec<SourceToken>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let text = lexer.slice();
        let line = lexer.extras.line;
        if let Ok(token) = token {
            tokens.push(SourceToken { token,
                                      text: text.to_string(),
                                      line });
        } else {
            let kind = if text.starts_with("/*") {
                SyntaxErrorKind::UnterminatedComment
            } else if text.starts_with('"') {
                SyntaxErrorKind::UnterminatedString
            } else if text.starts_with(|c: char| c.is_ascii_digit()) {
                SyntaxErrorKind::InvalidNumber(text.to_string())
            } else {
                SyntaxErrorKind::UnexpectedCharacter(text.to_string())
            };
            return Err(SyntaxError::new(SourceLocation::new(module, line), kind));
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Literals carry no sign, so `9223372036854775808` is accepted as
/// `i64::MIN` for `-9223372036854775808`; the lexeme builder rejects it
/// anywhere else.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal exceeds `2^63`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    let magnitude: u64 = lex.slice().parse().ok()?;
    i64::try_from(magnitude).ok()
                            .or_else(|| (magnitude == i64::MIN.unsigned_abs()).then_some(i64::MIN))
}

/// Strips the quotes of a string literal and replaces its escapes.
///
/// Unknown escapes keep the escaped character.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some(other) => result.push(other),
            None => {},
        }
    }

    result
}

/// Skips a block comment, counting the line breaks inside it.
///
/// A comment without `*/` is reported as an error covering the `/*`.
fn block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), ()> {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(end) => {
            lex.extras.line += remainder[..end].matches('\n').count();
            lex.bump(end + 2);
            FilterResult::Skip
        },
        None => FilterResult::Error(()),
    }
}
