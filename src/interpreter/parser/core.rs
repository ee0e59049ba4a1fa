use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Program, SourceLocation},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::{lexer::SourceToken, resolver::ExpressionResolver},
};

/// Result type used by the reader.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Reads operations from a token sequence.
///
/// The reader walks the tokens once, front to back. Statement structure is
/// recognized by keywords and punctuation; the tokens of each expression are
/// handed to an [`ExpressionResolver`]. A statement ends at `;`, at a closing
/// brace, or at a line break unless the line ends with an operator or an open
/// parenthesis.
///
/// # Example
/// ```
/// use sprig::interpreter::{lexer::tokenize, parser::core::Reader};
///
/// let source = "var limit = 3\nfun main() {\n println limit\n}";
/// let tokens = tokenize(source, "demo").unwrap();
/// let program = Reader::new(&tokens, "demo").read_program().unwrap();
///
/// assert!(program.functions.contains_key("main"));
/// assert_eq!(program.globals.operations.len(), 1);
/// ```
pub struct Reader<'a> {
    pub(super) tokens:   &'a [SourceToken],
    pub(super) position: usize,
    pub(super) base:     SourceLocation,
    pub(super) resolver: ExpressionResolver,
}

impl<'a> Reader<'a> {
    /// Creates a reader for the tokens of `module`.
    #[must_use]
    pub fn new(tokens: &'a [SourceToken], module: &str) -> Self {
        Self { tokens,
               position: 0,
               base: SourceLocation::new(module, 1),
               resolver: ExpressionResolver::new() }
    }

    /// Replaces the expression resolver, for example to recognize other
    /// literal forms.
    #[must_use]
    pub fn with_resolver(mut self, resolver: ExpressionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Reads a whole module.
    ///
    /// Only function declarations and `var`/`const` declarations may appear
    /// at the top level; the declarations are collected, in order, into the
    /// program's global block.
    ///
    /// # Errors
    /// - `NotAllowedAtTopLevel` for any other statement.
    /// - `DuplicateFunction` when a name is declared twice.
    /// - Any error raised while reading a declaration.
    pub fn read_program(mut self) -> ParseResult<Program> {
        let mut functions = HashMap::new();
        let mut globals = Block::new(self.base.clone());

        while let Some(token) = self.peek() {
            if token.is_symbol(";") {
                self.advance();
            } else if token.is_word("fun") {
                let function = self.read_function()?;
                if functions.contains_key(&function.name) {
                    let kind = SyntaxErrorKind::DuplicateFunction(function.name.to_string());
                    return Err(SyntaxError::new(function.location, kind));
                }
                tracing::debug!(function = %function.name, parameters = function.parameters.len(),
                                "read function");
                functions.insert(Rc::clone(&function.name), Rc::new(function));
            } else if token.is_word("var") || token.is_word("const") {
                globals.operations.push(self.read_declaration()?);
            } else {
                return Err(self.error_at(token.line,
                                         SyntaxErrorKind::NotAllowedAtTopLevel(token.text.clone())));
            }
        }

        Ok(Program { module: Rc::clone(&self.base.module),
                     functions,
                     globals })
    }

    /// The next token, without consuming it.
    pub(super) fn peek(&self) -> Option<&'a SourceToken> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the next token.
    pub(super) fn advance(&mut self) -> Option<&'a SourceToken> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// The line of the next token, or of the last one at the end of input.
    pub(super) fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(self.base.line, |token| token.line)
    }

    /// The location of `line` in this module.
    pub(super) fn location_at(&self, line: usize) -> SourceLocation {
        self.base.at_line(line)
    }

    /// A syntax error at `line`.
    pub(super) fn error_at(&self, line: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(self.location_at(line), kind)
    }
}
