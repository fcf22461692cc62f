//! Lexical layer for the `CREATE TABLE` subset.
//!
//! Modules:
//! - `keyword`    : Keywords the column grammar reacts to or tolerates.
//! - `token_kind` : Classification tag for lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its lexeme and span.
//! - `tokenizer`  : Priority-ordered pattern table and the single-pass scanner.
//!
//! Design Principles:
//! 1. The pattern table is the single source of truth for precedence.
//! 2. Preserve original lexemes; consumers strip quotes where they need to.
//! 3. Reject text no pattern covers instead of guessing.
//!
//! Public Re-exports:
//! `use crate::sql::{tokenize, Token, TokenKind, Keyword};` works directly.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{TOKEN_PATTERNS, TokenPattern, render, tokenize};
