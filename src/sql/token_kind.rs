//! Token kind definitions for the `CREATE TABLE` tokenizer.
//!
//! A `TokenKind` is a pure classification tag; the matched text lives on the
//! `Token` itself. Keeping the tag `Copy` lets the pattern table in
//! `tokenizer.rs` be a `const`.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// Recognized SQL keyword.
    #[display("{_0}")]
    Keyword(Keyword),
    /// The compound `NOT NULL` (any whitespace between the two words).
    #[display("NOT_NULL")]
    NotNull,
    /// Decimal literal such as `3.14`.
    #[display("REAL_LITERAL")]
    RealLiteral,
    /// Integer literal such as `42`.
    #[display("INTEGER_LITERAL")]
    IntegerLiteral,
    /// Parenthesized length suffix such as `(100)`.
    #[display("VARCHAR_LENGTH")]
    VarcharLength,
    /// Opening parenthesis `(`.
    #[display("LPAREN")]
    ParenOpen,
    /// Closing parenthesis `)`.
    #[display("RPAREN")]
    ParenClose,
    /// Comma `,`.
    #[display("COMMA")]
    Comma,
    /// Statement terminator `;`.
    #[display("SEMICOLON")]
    Semicolon,
    /// `=` as used by table options (`ENGINE=InnoDB`).
    #[display("EQUALS")]
    Equals,
    /// Comparison / arithmetic operator inside `CHECK` expressions.
    #[display("OPERATOR")]
    Operator,
    /// Dot `.` (qualified names).
    #[display("DOT")]
    Dot,
    /// Single-quoted string; the lexeme keeps its quotes.
    #[display("STRING_LITERAL")]
    StringLiteral,
    /// Backtick-quoted identifier; the lexeme keeps its backticks.
    #[display("QUOTED_IDENTIFIER")]
    QuotedIdentifier,
    /// Table / column / generic identifier.
    #[display("IDENTIFIER")]
    Identifier,
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// True for plain and backtick-quoted identifiers.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::QuotedIdentifier)
    }

    /// True for tokens that can stand as a column default value.
    pub fn is_default_value(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::RealLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::Keyword(Keyword::CurrentTimestamp)
        )
    }

    /// True for defaults written without a `DEFAULT` keyword. String literals
    /// are excluded since they only count after `DEFAULT` or `COMMENT`.
    pub fn is_inline_default(&self) -> bool {
        self.is_default_value() && *self != TokenKind::StringLiteral
    }
}
