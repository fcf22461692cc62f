use super::*;

impl StatementParser<'_> {
    /// Parse `[IF NOT EXISTS] <name>` right after `CREATE TABLE` and return
    /// the table name. A schema-qualified name (`shop.users`) yields its last
    /// segment.
    pub fn parse_header(&mut self) -> ParseResult<String> {
        if self.peek().is_some_and(|t| t.is_keyword(Keyword::If)) {
            let position = self.position();
            // IF NOT EXISTS plus the name
            if self.remaining() < 4 {
                return Err(ParseError::IncompleteIfNotExists { position });
            }
            let clause = [Keyword::If, Keyword::Not, Keyword::Exists];
            let complete = clause
                .iter()
                .enumerate()
                .all(|(offset, kw)| self.peek_at(offset).is_some_and(|t| t.is_keyword(*kw)));
            if !complete {
                return Err(ParseError::IncompleteIfNotExists { position });
            }
            self.index += clause.len();
        }

        let mut name = self.table_identifier()?;
        while self.peek_kind(TokenKind::Dot) {
            self.index += 1;
            name = self.table_identifier()?;
        }
        trace!("Table name {name:?}");
        Ok(name)
    }

    fn table_identifier(&mut self) -> ParseResult<String> {
        match self.peek().and_then(|t| t.ident()) {
            Some(name) => {
                self.index += 1;
                Ok(name.to_string())
            }
            None => Err(ParseError::MissingTableName {
                position: self.position(),
            }),
        }
    }
}
