use super::*;

impl<'a> StatementParser<'a> {
    /// Parse the parenthesized column list. The cursor must sit on its `(`;
    /// on success it sits just past the matching `)`.
    ///
    /// The list is walked token by token with an explicit stack of open
    /// parenthesis offsets and one in-progress `FieldBuilder`:
    /// - a comma at depth 1 closes the current field,
    /// - the `)` that empties the stack closes the list,
    /// - nested parentheses (`PRIMARY KEY (id)`, `DECIMAL(10,2)`) only move
    ///   the depth; identifiers and bare literals inside them are ignored.
    ///
    /// `DEFAULT` always consumes the token after it; only literals and
    /// `CURRENT_TIMESTAMP` are recorded as the default.
    ///
    /// Fields lacking a name or a type are dropped when closed.
    pub fn parse_fields(&mut self) -> ParseResult<Vec<FieldMetadata>> {
        let mut open_parens: Vec<usize> = Vec::new();
        let mut current: Option<FieldBuilder> = None;
        let mut fields = Vec::new();

        while let Some(token) = self.advance() {
            let top_level = open_parens.len() == 1;
            match token.kind {
                TokenKind::ParenOpen => open_parens.push(token.start),
                TokenKind::ParenClose => {
                    if open_parens.pop().is_none() {
                        return Err(ParseError::UnmatchedClosingParen {
                            position: token.start,
                        });
                    }
                    if open_parens.is_empty() {
                        close_field(current.take(), &mut fields);
                        return Ok(fields);
                    }
                }
                TokenKind::Identifier | TokenKind::QuotedIdentifier if top_level => {
                    current
                        .get_or_insert_with(FieldBuilder::default)
                        .name(token.unquoted());
                }
                TokenKind::VarcharLength => {
                    if let Some(field) = current.as_mut() {
                        if field.current_type() == Some(FieldType::Varchar) {
                            field.length(token.unquoted());
                        }
                    }
                }
                TokenKind::Keyword(Keyword::Enum) => {
                    let values = self.parse_enum()?;
                    if let Some(field) = current.as_mut() {
                        field.enum_values(values);
                    }
                }
                TokenKind::Keyword(kw) if kw.column_type().is_some() => {
                    if let (Some(field), Some(ty)) = (current.as_mut(), kw.column_type()) {
                        field.field_type(ty);
                    }
                }
                kind if kind.is_inline_default() && top_level => {
                    if let Some(field) = current.as_mut() {
                        field.default_value(default_literal(token));
                    }
                }
                TokenKind::Keyword(Keyword::Default) => {
                    // The value is consumed even when it is not a literal we
                    // record (`NULL`, `TRUE`, `now()`).
                    let Some(value) = self.advance() else { continue };
                    if value.kind.is_default_value() {
                        if let Some(field) = current.as_mut() {
                            field.default_value(default_literal(value));
                        }
                    } else if value.kind == TokenKind::ParenOpen {
                        open_parens.push(value.start);
                    }
                }
                TokenKind::NotNull => {}
                TokenKind::Keyword(Keyword::AutoIncrement) => {
                    if let Some(field) = current.as_mut() {
                        field.auto_increment();
                    }
                }
                TokenKind::Keyword(Keyword::Comment) => {
                    if let Some(text) = self.next_if(|kind| *kind == TokenKind::StringLiteral) {
                        if let Some(field) = current.as_mut() {
                            field.comment(text.unquoted());
                        }
                    }
                }
                TokenKind::Comma if top_level => close_field(current.take(), &mut fields),
                _ => {}
            }
        }

        match open_parens.last() {
            Some(&position) => Err(ParseError::UnmatchedOpeningParen { position }),
            None => {
                close_field(current.take(), &mut fields);
                Ok(fields)
            }
        }
    }

    /// Consume the next token if its kind satisfies `accept`.
    fn next_if(&mut self, accept: impl Fn(&TokenKind) -> bool) -> Option<&'a Token> {
        let token = self.peek().filter(|t| accept(&t.kind))?;
        self.index += 1;
        Some(token)
    }
}

/// Value a literal token contributes as a column default.
fn default_literal(token: &Token) -> &str {
    if token.is_keyword(Keyword::CurrentTimestamp) {
        Keyword::CurrentTimestamp.as_str()
    } else {
        token.unquoted()
    }
}

fn close_field(builder: Option<FieldBuilder>, fields: &mut Vec<FieldMetadata>) {
    let Some(builder) = builder else { return };
    match builder.build() {
        Ok(field) => fields.push(field),
        Err(incomplete) => trace!("Dropping incomplete column definition {incomplete:?}"),
    }
}
