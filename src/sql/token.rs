//! Token model tying a `TokenKind` to its lexeme and source span.
//!
//! A `Token` is produced once by the tokenizer and never mutated. The lexeme is
//! kept exactly as written (quotes, backticks and parentheses included); the
//! consumers strip decoration through `unquoted`.
//!
//! See sibling modules:
//! - `keyword.rs`    for the `Keyword` enum.
//! - `token_kind.rs` for `TokenKind` classification.
//! - `tokenizer.rs`  for producing `Vec<Token>` from raw SQL input.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is the slice of the original input that `lexeme` was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            start,
            end,
        }
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    /// Returns the identifier text (backticks stripped) if this token is an identifier.
    pub fn ident(&self) -> Option<&str> {
        self.kind.is_ident().then(|| self.unquoted())
    }

    /// The lexeme without its surrounding decoration: quotes for string
    /// literals, backticks for quoted identifiers, parentheses for length
    /// suffixes. Other kinds return the lexeme unchanged.
    pub fn unquoted(&self) -> &str {
        let delimiters = match self.kind {
            TokenKind::StringLiteral => Some(('\'', '\'')),
            TokenKind::QuotedIdentifier => Some(('`', '`')),
            TokenKind::VarcharLength => Some(('(', ')')),
            _ => None,
        };
        match delimiters {
            Some((open, close)) => self
                .lexeme
                .strip_prefix(open)
                .and_then(|s| s.strip_suffix(close))
                .unwrap_or(&self.lexeme),
            None => &self.lexeme,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lexeme)
    }
}
