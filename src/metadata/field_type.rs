use derive_more::Display;
use serde::Serialize;

/// Column types the parser recognizes. `Enum` is assigned only after a
/// successful `ENUM(...)` clause; the other variants come from type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum FieldType {
    #[display("INT")]
    #[serde(rename = "INT")]
    Int,
    #[display("INTEGER")]
    #[serde(rename = "INTEGER")]
    Integer,
    #[display("VARCHAR")]
    #[serde(rename = "VARCHAR")]
    Varchar,
    #[display("TEXT")]
    #[serde(rename = "TEXT")]
    Text,
    #[display("REAL")]
    #[serde(rename = "REAL")]
    Real,
    #[display("BOOLEAN")]
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[display("TIMESTAMP")]
    #[serde(rename = "TIMESTAMP")]
    Timestamp,
    #[display("enum")]
    #[serde(rename = "enum")]
    Enum,
}

impl FieldType {
    /// Only `VARCHAR` columns keep a length qualifier.
    pub const fn takes_length(self) -> bool {
        matches!(self, FieldType::Varchar)
    }
}
