//! SQL keyword model used by the `CREATE TABLE` tokenizer and parser.
//!
//! Only the keywords the column-definition grammar reacts to (or explicitly
//! tolerates) are modelled. Anything else is an identifier.
//!
//! Design notes:
//! - Keywords are matched case-insensitively by the tokenizer's pattern table.
//! - `as_str` provides the canonical upper-case spelling, which is also the
//!   `Display` form.

use crate::metadata::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Create,
    Table,
    If,
    Not,
    Exists,
    Primary,
    Key,
    Default,
    Null,
    AutoIncrement,
    Unique,
    Check,
    Comment,
    Boolean,
    Integer,
    Int,
    Varchar,
    Text,
    Real,
    Enum,
    Timestamp,
    CurrentTimestamp,
}

impl Keyword {
    /// Every keyword, in tokenizer priority order.
    #[cfg(test)]
    pub const ALL: [Self; 22] = [
        Keyword::Create,
        Keyword::Table,
        Keyword::If,
        Keyword::Not,
        Keyword::Exists,
        Keyword::Primary,
        Keyword::Key,
        Keyword::Default,
        Keyword::Null,
        Keyword::AutoIncrement,
        Keyword::Unique,
        Keyword::Check,
        Keyword::Comment,
        Keyword::Boolean,
        Keyword::Integer,
        Keyword::Int,
        Keyword::Varchar,
        Keyword::Text,
        Keyword::Real,
        Keyword::Enum,
        Keyword::Timestamp,
        Keyword::CurrentTimestamp,
    ];

    /// Canonical upper-case string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Create => "CREATE",
            Table => "TABLE",
            If => "IF",
            Not => "NOT",
            Exists => "EXISTS",
            Primary => "PRIMARY",
            Key => "KEY",
            Default => "DEFAULT",
            Null => "NULL",
            AutoIncrement => "AUTO_INCREMENT",
            Unique => "UNIQUE",
            Check => "CHECK",
            Comment => "COMMENT",
            Boolean => "BOOLEAN",
            Integer => "INTEGER",
            Int => "INT",
            Varchar => "VARCHAR",
            Text => "TEXT",
            Real => "REAL",
            Enum => "ENUM",
            Timestamp => "TIMESTAMP",
            CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }

    /// The column type a type keyword names. `ENUM` is excluded: its type is
    /// only established once its value list has been parsed.
    pub const fn column_type(self) -> Option<FieldType> {
        use Keyword::*;
        let ty = match self {
            Int => FieldType::Int,
            Integer => FieldType::Integer,
            Varchar => FieldType::Varchar,
            Text => FieldType::Text,
            Real => FieldType::Real,
            Boolean => FieldType::Boolean,
            Timestamp => FieldType::Timestamp,
            _ => return None,
        };
        Some(ty)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
