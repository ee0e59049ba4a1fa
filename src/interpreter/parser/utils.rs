use crate::{
    ast::{Expression, Variable},
    error::SyntaxErrorKind,
    interpreter::{
        lexer::{SourceToken, Token},
        parser::core::{ParseResult, Reader},
        resolver::lexeme_builder::is_identifier,
    },
};

/// Symbols after which an expression continues on the next line.
fn continues_expression(token: &SourceToken) -> bool {
    matches!(&token.token, Token::Symbol(s) if !matches!(s.as_str(), ")" | "++" | "--" | ";" | "{" | "}"))
}

impl<'a> Reader<'a> {
    /// Consumes the next token, which must be `symbol`.
    ///
    /// # Errors
    /// `Expected` when another token follows, `UnexpectedEnd` at the end of
    /// input.
    pub(super) fn expect_symbol(&mut self, symbol: &str) -> ParseResult<&'a SourceToken> {
        match self.peek() {
            Some(token) if token.is_symbol(symbol) => {
                self.position += 1;
                Ok(token)
            },
            Some(token) => Err(self.error_at(token.line,
                                             SyntaxErrorKind::Expected { expected: symbol.to_string(),
                                                                         found:    token.text.clone(), })),
            None => Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd(symbol.to_string()))),
        }
    }

    /// Consumes the next token, which must be the keyword `word`.
    pub(super) fn expect_word(&mut self, word: &str) -> ParseResult<&'a SourceToken> {
        match self.peek() {
            Some(token) if token.is_word(word) => {
                self.position += 1;
                Ok(token)
            },
            Some(token) => Err(self.error_at(token.line,
                                             SyntaxErrorKind::Expected { expected: word.to_string(),
                                                                         found:    token.text.clone(), })),
            None => Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd(word.to_string()))),
        }
    }

    /// Consumes the next token when it is `symbol`.
    pub(super) fn eat_symbol(&mut self, symbol: &str) -> bool {
        let found = self.peek().is_some_and(|token| token.is_symbol(symbol));
        if found {
            self.position += 1;
        }
        found
    }

    /// Consumes the next token when it is the keyword `word`.
    pub(super) fn eat_word(&mut self, word: &str) -> bool {
        let found = self.peek().is_some_and(|token| token.is_word(word));
        if found {
            self.position += 1;
        }
        found
    }

    /// Reads a variable, constant, parameter or function name.
    ///
    /// # Errors
    /// `InvalidIdentifier` for keywords, literals, type names and anything
    /// that is not a word.
    pub(super) fn read_identifier(&mut self) -> ParseResult<Variable> {
        match self.advance() {
            Some(SourceToken { token: Token::Word(word), .. }) if is_identifier(word) => {
                Ok(Variable::new(word))
            },
            Some(token) => {
                Err(self.error_at(token.line, SyntaxErrorKind::InvalidIdentifier(token.text.clone())))
            },
            None => Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd("identifier".into()))),
        }
    }

    /// Reads a comma-separated list of items up to and including `closing`.
    ///
    /// An immediately encountered closing symbol produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `read_item`: Reads one element.
    /// - `closing`: The symbol that ends the list.
    pub(super) fn read_comma_separated<T>(&mut self,
                                          read_item: impl Fn(&mut Self) -> ParseResult<T>,
                                          closing: &str)
                                          -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.eat_symbol(closing) {
            return Ok(items);
        }
        loop {
            items.push(read_item(self)?);
            if self.eat_symbol(closing) {
                return Ok(items);
            }
            self.expect_symbol(",")?;
        }
    }

    /// Collects the tokens of one expression.
    ///
    /// Collection stops before `;`, `{`, `}` or an unmatched `)`, and at a
    /// line break unless the previous token is an operator, `(`, `,`, `?` or
    /// `:`. `previous` is the token just before the expression; when the
    /// expression would start on a later line than that token, it is empty.
    pub(super) fn take_expression(&mut self,
                                  previous: Option<&'a SourceToken>)
                                  -> &'a [SourceToken] {
        let start = self.position;
        let mut previous = previous;
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            if token.is_symbol(";") || token.is_symbol("{") || token.is_symbol("}") {
                break;
            }
            if depth == 0 {
                if token.is_symbol(")") {
                    break;
                }
                if let Some(previous) = previous
                   && token.line != previous.line
                   && !continues_expression(previous)
                {
                    break;
                }
            }
            if token.is_symbol("(") {
                depth += 1;
            } else if token.is_symbol(")") {
                depth -= 1;
            }
            previous = Some(token);
            self.position += 1;
        }

        let tokens = self.tokens;
        &tokens[start..self.position]
    }

    /// Reads `( expression )` and resolves the expression.
    pub(super) fn read_parenthesized(&mut self) -> ParseResult<Expression> {
        let open = self.expect_symbol("(")?;
        let start = self.position;
        let mut depth = 1usize;

        while let Some(token) = self.peek() {
            if token.is_symbol("(") {
                depth += 1;
            } else if token.is_symbol(")") {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            self.position += 1;
        }

        let all = self.tokens;
        let tokens = &all[start..self.position];
        self.expect_symbol(")")?;
        self.resolve(tokens, open.line)
    }

    /// Resolves expression tokens; the location is the line of the first
    /// token, or `line` when there are none.
    pub(super) fn resolve(&self, tokens: &[SourceToken], line: usize) -> ParseResult<Expression> {
        let line = tokens.first().map_or(line, |token| token.line);
        self.resolver.resolve(tokens, &self.location_at(line))
    }
}
