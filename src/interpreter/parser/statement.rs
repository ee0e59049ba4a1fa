use crate::{
    ast::{
        Block, CaseLabel, ConditionalBlock, Expression, Operation, OperationKind, SwitchCase,
    },
    error::SyntaxErrorKind,
    interpreter::{
        lexer::SourceToken,
        parser::core::{ParseResult, Reader},
    },
};

impl<'a> Reader<'a> {
    /// Reads a single statement.
    ///
    /// The statement kind is chosen by its first token: a keyword selects the
    /// matching construct, `{` opens a nested block, and anything else is
    /// read as an expression statement. The location of the statement is the
    /// line of its first token.
    ///
    /// # Returns
    /// The parsed [`Operation`].
    pub(super) fn read_statement(&mut self) -> ParseResult<Operation> {
        let Some(first) = self.peek() else {
            return Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd("statement".into())));
        };
        let location = self.location_at(first.line);

        let kind = if first.is_word("var") || first.is_word("const") {
            let declaration = self.read_declaration()?;
            self.eat_symbol(";");
            return Ok(declaration);
        } else if first.is_symbol("{") {
            OperationKind::Block(self.read_block()?)
        } else if self.eat_word("println") {
            let tokens = self.take_expression(Some(first));
            let value = if tokens.is_empty() {
                None
            } else {
                Some(self.resolve(tokens, first.line)?)
            };
            OperationKind::Println(value)
        } else if self.eat_word("if") {
            self.read_if()?
        } else if self.eat_word("while") {
            let condition = self.read_parenthesized()?;
            let body = self.read_block()?;
            OperationKind::While { condition, body }
        } else if self.eat_word("do") {
            let body = self.read_block()?;
            self.expect_word("while")?;
            let condition = self.read_parenthesized()?;
            OperationKind::DoWhile { body, condition }
        } else if self.eat_word("for") {
            self.read_for()?
        } else if self.eat_word("switch") {
            self.read_switch()?
        } else if self.eat_word("break") {
            OperationKind::Break
        } else if self.eat_word("continue") {
            OperationKind::Continue
        } else if self.eat_word("return") {
            let tokens = self.take_expression(Some(first));
            let value = if tokens.is_empty() {
                None
            } else {
                Some(self.resolve(tokens, first.line)?)
            };
            OperationKind::Return(value)
        } else {
            self.read_expression_statement()?
        };

        self.eat_symbol(";");
        Ok(Operation { kind, location })
    }

    /// Reads `var name (= value)?` or `const name = value`.
    ///
    /// # Errors
    /// `MissingInitializer` for a constant without a value.
    pub(super) fn read_declaration(&mut self) -> ParseResult<Operation> {
        let keyword = self.advance()
                          .ok_or_else(|| {
                              self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd("var".into()))
                          })?;
        let constant = keyword.is_word("const");
        let name = self.read_identifier()?;

        let value = match self.peek() {
            Some(equals) if equals.is_symbol("=") => {
                self.advance();
                let tokens = self.take_expression(Some(equals));
                Some(self.resolve(tokens, equals.line)?)
            },
            _ if constant => {
                return Err(self.error_at(keyword.line,
                                         SyntaxErrorKind::MissingInitializer(name.to_string())));
            },
            _ => None,
        };

        Ok(Operation { kind:     OperationKind::Declaration { name, value, constant },
                       location: self.location_at(keyword.line), })
    }

    /// Reads the rest of `if (c) {..} else if (c) {..} else {..}` after the
    /// first `if`.
    fn read_if(&mut self) -> ParseResult<OperationKind> {
        let mut branches = vec![self.read_conditional_block()?];
        let mut otherwise = None;

        while self.eat_word("else") {
            if self.eat_word("if") {
                branches.push(self.read_conditional_block()?);
            } else {
                otherwise = Some(self.read_block()?);
                break;
            }
        }

        Ok(OperationKind::If { branches, otherwise })
    }

    fn read_conditional_block(&mut self) -> ParseResult<ConditionalBlock> {
        let condition = self.read_parenthesized()?;
        let body = self.read_block()?;
        Ok(ConditionalBlock { condition, body })
    }

    /// Reads `(initializer; condition; update) { body }` after `for`.
    ///
    /// Every part of the header may be empty.
    fn read_for(&mut self) -> ParseResult<OperationKind> {
        let open = self.expect_symbol("(")?;

        let initializer = match self.peek() {
            Some(token) if token.is_symbol(";") => None,
            Some(token) if token.is_word("var") || token.is_word("const") => {
                Some(Box::new(self.read_declaration()?))
            },
            _ => {
                let line = self.line();
                let kind = self.read_expression_statement()?;
                Some(Box::new(Operation { kind,
                                          location: self.location_at(line) }))
            },
        };
        self.expect_symbol(";")?;

        let condition = self.read_optional_expression(open)?;
        self.expect_symbol(";")?;
        let update = self.read_optional_expression(open)?;
        self.expect_symbol(")")?;

        let body = self.read_block()?;
        Ok(OperationKind::For { initializer,
                                condition,
                                update,
                                body })
    }

    fn read_optional_expression(&mut self,
                                anchor: &'a SourceToken)
                                -> ParseResult<Option<Expression>> {
        let tokens = self.take_expression(None);
        if tokens.is_empty() {
            return Ok(None);
        }
        self.resolve(tokens, anchor.line).map(Some)
    }

    /// Reads `(subject) { case label: ... default: ... }` after `switch`.
    ///
    /// # Errors
    /// - `DuplicateDefault` for a second `default` label.
    /// - `Expected` when a statement appears before the first label.
    fn read_switch(&mut self) -> ParseResult<OperationKind> {
        let subject = self.read_parenthesized()?;
        self.expect_symbol("{")?;

        let mut cases: Vec<SwitchCase> = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(self.error_at(self.line(), SyntaxErrorKind::UnexpectedEnd("}".into())));
            };

            let label = if self.eat_word("case") {
                let tokens = self.take_case_label();
                let label = self.resolve(tokens, token.line)?;
                CaseLabel::Case(label)
            } else if self.eat_word("default") {
                if cases.iter().any(|case| case.label == CaseLabel::Default) {
                    return Err(self.error_at(token.line, SyntaxErrorKind::DuplicateDefault));
                }
                CaseLabel::Default
            } else if self.eat_symbol("}") {
                break;
            } else if let Some(case) = cases.last_mut() {
                if !self.eat_symbol(";") {
                    case.body.operations.push(self.read_statement()?);
                }
                continue;
            } else {
                return Err(self.error_at(token.line,
                                         SyntaxErrorKind::Expected { expected: "case".into(),
                                                                     found:    token.text.clone(), }));
            };

            self.expect_symbol(":")?;
            cases.push(SwitchCase { label,
                                    body: Block::new(self.location_at(token.line)) });
        }

        Ok(OperationKind::Switch { subject, cases })
    }

    /// Collects the tokens of a case label, up to the `:` that is not part
    /// of a ternary.
    fn take_case_label(&mut self) -> &'a [SourceToken] {
        let start = self.position;
        let mut depth = 0usize;
        let mut pending_questions = 0usize;

        while let Some(token) = self.peek() {
            if token.is_symbol("(") {
                depth += 1;
            } else if token.is_symbol(")") {
                depth = depth.saturating_sub(1);
            } else if token.is_symbol("?") {
                pending_questions += 1;
            } else if token.is_symbol(":") {
                if depth == 0 && pending_questions == 0 {
                    break;
                }
                pending_questions = pending_questions.saturating_sub(1);
            } else if token.is_symbol("{") || token.is_symbol("}") || token.is_symbol(";") {
                break;
            }
            self.position += 1;
        }

        let tokens = self.tokens;
        &tokens[start..self.position]
    }

    /// Reads an expression used as a statement.
    ///
    /// A statement that resolves to a plain function call becomes an
    /// `Invocation`.
    fn read_expression_statement(&mut self) -> ParseResult<OperationKind> {
        let line = self.line();
        let tokens = self.take_expression(None);
        if tokens.is_empty() {
            let found = self.peek().map_or_else(String::new, |token| token.text.clone());
            return Err(self.error_at(line,
                                     SyntaxErrorKind::Expected { expected: "statement".into(),
                                                                 found }));
        }

        Ok(match self.resolve(tokens, line)? {
            invocation @ Expression::FunctionInvocation { .. } => OperationKind::Invocation(invocation),
            expression => OperationKind::Expression(expression),
        })
    }
}
