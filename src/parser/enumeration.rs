use super::*;

impl StatementParser<'_> {
    /// Parse `('a', 'b', ...)` following an `ENUM` keyword. The cursor must
    /// sit on the `(`; on success it sits just past the matching `)`.
    ///
    /// Values keep source order and lose their quotes. Commas and anything
    /// other than string literals are skipped.
    pub fn parse_enum(&mut self) -> ParseResult<Vec<String>> {
        let Some(open) = self.peek().filter(|t| t.kind == TokenKind::ParenOpen) else {
            return Err(self.expected("( after ENUM"));
        };
        self.index += 1;

        let mut depth = 1usize;
        let mut values = Vec::new();
        while let Some(token) = self.advance() {
            match token.kind {
                TokenKind::StringLiteral if depth == 1 => values.push(token.unquoted().to_string()),
                TokenKind::ParenOpen => depth += 1,
                TokenKind::ParenClose => {
                    depth -= 1;
                    if depth == 0 {
                        trace!("ENUM values {values:?}");
                        return Ok(values);
                    }
                }
                _ => {}
            }
        }

        Err(ParseError::UnmatchedParenInEnum {
            position: open.start,
        })
    }
}
