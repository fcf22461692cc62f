//! Parser for one `CREATE TABLE` statement.
//!
//! Layout:
//! - `statement`   : top-level driver (`parse`) and table options.
//! - `header`      : `[IF NOT EXISTS] <name>`.
//! - `fields`      : the parenthesized column list; depth-tracking state machine.
//! - `enumeration` : `ENUM('a', 'b', ...)` literal lists.
//!
//! All delegates share one `StatementParser` cursor and return
//! `ParseResult`; the first error short-circuits the whole statement.
crate::reexport!(parse_error);
crate::reexport!(statement);
crate::reexport!(header);
crate::reexport!(fields);
crate::reexport!(enumeration);
mod parser_tests;

use crate::*;

/// How the driver treats tokens around the `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum ParseMode {
    /// Statement must start with `CREATE TABLE` and end at its `;`.
    #[default]
    #[display("strict")]
    Strict,
    /// Unknown leading tokens are skipped and trailing tokens ignored.
    #[display("lenient")]
    Lenient,
}

/// Cursor over a token stream shared by the statement delegates.
#[derive(Debug, Clone)]
pub struct StatementParser<'a> {
    tokens: &'a [Token],
    index: usize,
    mode: ParseMode,
}

impl<'a> StatementParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            index: 0,
            mode: ParseMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.index + offset)
    }

    fn peek_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    /// Byte offset of the next token, or the end of the last one.
    fn position(&self) -> usize {
        match self.peek() {
            Some(token) => token.start,
            None => self.tokens.last().map_or(0, |t| t.end),
        }
    }

    /// Error for the next token not being `expected`.
    fn expected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.lexeme.clone(),
                position: token.start,
            },
            None => ParseError::UnexpectedEnd {
                expected,
                position: self.position(),
            },
        }
    }
}

/// Tokenize and parse one statement.
pub fn parse_statement(sql: &str, mode: ParseMode) -> ParseResult<TableMetadata> {
    let tokens = tokenize(sql)?;
    trace!("Parsing {}", render(&tokens));
    StatementParser::new(&tokens).with_mode(mode).parse()
}
