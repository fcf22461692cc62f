/// Structured parse failures. Every positioned variant carries the byte
/// offset of the offending token in the statement text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognized input {lexeme:?} at byte {position}")]
    UnrecognizedToken { lexeme: String, position: usize },

    #[error("expected {expected} but found {found:?} at byte {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },

    #[error("expected {expected} but the statement ended at byte {position}")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },

    #[error("empty statement")]
    EmptyStatement,

    #[error("no CREATE TABLE found in statement")]
    MissingCreateTable,

    #[error("expected table name after TABLE at byte {position}")]
    MissingTableName { position: usize },

    #[error("incomplete IF NOT EXISTS clause at byte {position}")]
    IncompleteIfNotExists { position: usize },

    #[error("unmatched opening parenthesis at byte {position}")]
    UnmatchedOpeningParen { position: usize },

    #[error("unmatched closing parenthesis at byte {position}")]
    UnmatchedClosingParen { position: usize },

    #[error("unmatched parenthesis in ENUM definition at byte {position}")]
    UnmatchedParenInEnum { position: usize },
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
