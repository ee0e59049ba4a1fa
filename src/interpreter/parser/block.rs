use std::rc::Rc;

use crate::{
    ast::{Block, Function},
    error::SyntaxErrorKind,
    interpreter::parser::core::{ParseResult, Reader},
};

impl Reader<'_> {
    /// Reads a block delimited by braces.
    ///
    /// A block consists of zero or more statements, optionally separated by
    /// `;`. Reading continues until the matching `}` is consumed.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// `UnexpectedEnd` when the input ends before the closing brace, and any
    /// error raised by a statement inside the block.
    pub(super) fn read_block(&mut self) -> ParseResult<Block> {
        let open = self.expect_symbol("{")?;
        let mut block = Block::new(self.location_at(open.line));

        loop {
            match self.peek() {
                None => {
                    return Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd("}".into())));
                },
                Some(token) if token.is_symbol("}") => {
                    self.advance();
                    return Ok(block);
                },
                Some(token) if token.is_symbol(";") => {
                    self.advance();
                },
                Some(_) => block.operations.push(self.read_statement()?),
            }
        }
    }

    /// Reads a function declaration.
    ///
    /// Grammar: `function := "fun" name "(" (name ("," name)*)? ")" block`
    ///
    /// # Errors
    /// `DuplicateParameter` when two parameters share a name, and
    /// `InvalidIdentifier` for names that are reserved.
    pub(super) fn read_function(&mut self) -> ParseResult<Function> {
        let keyword = self.expect_word("fun")?;
        let name = self.read_identifier()?;
        self.expect_symbol("(")?;
        let parameters = self.read_comma_separated(Self::read_identifier, ")")?;

        for (index, parameter) in parameters.iter().enumerate() {
            if parameters[..index].contains(parameter) {
                return Err(self.error_at(keyword.line,
                                         SyntaxErrorKind::DuplicateParameter {
                                             function:  name.to_string(),
                                             parameter: parameter.to_string(),
                                         }));
            }
        }

        let body = self.read_block()?;

        Ok(Function { name: Rc::from(name.name()),
                      parameters,
                      body,
                      location: self.location_at(keyword.line) })
    }
}
