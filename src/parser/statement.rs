use super::*;

impl StatementParser<'_> {
    /// Parse the token stream into one `TableMetadata`.
    ///
    /// Strict mode expects `CREATE TABLE` as the first two tokens, a field
    /// list, optional table options and at most a terminating `;`. Lenient
    /// mode skips to the first `CREATE TABLE`, tolerates a missing field list
    /// and ignores whatever follows the statement.
    pub fn parse(mut self) -> ParseResult<TableMetadata> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyStatement);
        }
        self.seek_create_table()?;

        let mut table = TableMetadata::new(self.parse_header()?);
        if self.peek_kind(TokenKind::ParenOpen) {
            table.fields = self.parse_fields()?;
        } else if self.mode == ParseMode::Strict {
            return Err(self.expected("("));
        } else {
            return Ok(table);
        }
        table.comment = self.parse_table_options()?;

        debug!(
            "Parsed table {} with {} fields",
            table.table_name,
            table.fields.len()
        );
        Ok(table)
    }

    /// Position the cursor just past `CREATE TABLE`.
    fn seek_create_table(&mut self) -> ParseResult<()> {
        let starts_here = |p: &Self| {
            p.peek().is_some_and(|t| t.is_keyword(Keyword::Create))
                && p.peek_at(1).is_some_and(|t| t.is_keyword(Keyword::Table))
        };

        match self.mode {
            ParseMode::Strict => {
                if !self.peek().is_some_and(|t| t.is_keyword(Keyword::Create)) {
                    return Err(self.expected("CREATE"));
                }
                self.index += 1;
                if !self.peek().is_some_and(|t| t.is_keyword(Keyword::Table)) {
                    return Err(self.expected("TABLE"));
                }
                self.index += 1;
                Ok(())
            }
            ParseMode::Lenient => {
                while self.remaining() > 0 {
                    if starts_here(self) {
                        self.index += 2;
                        return Ok(());
                    }
                    if let Some(skipped) = self.advance() {
                        trace!("Skipping {:?} before CREATE TABLE", skipped.lexeme);
                    }
                }
                Err(ParseError::MissingCreateTable)
            }
        }
    }

    /// Consume table options (`ENGINE=InnoDB COMMENT='...'`) up to and
    /// including the terminating `;`. Returns the table comment, if any.
    fn parse_table_options(&mut self) -> ParseResult<Option<String>> {
        let mut comment = None;
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::Semicolon => break,
                TokenKind::Keyword(Keyword::Comment) => {
                    if self.peek_kind(TokenKind::Equals) {
                        self.index += 1;
                    }
                    if let Some(text) = self.peek().filter(|t| t.kind == TokenKind::StringLiteral) {
                        self.index += 1;
                        comment = Some(text.unquoted().to_string()).filter(|c| !c.is_empty());
                    }
                }
                _ => trace!("Ignoring table option token {:?}", token.lexeme),
            }
        }

        if self.mode == ParseMode::Strict && self.remaining() > 0 {
            return Err(self.expected("end of statement"));
        }
        Ok(comment)
    }
}
