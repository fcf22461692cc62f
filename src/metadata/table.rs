use super::*;
use serde::Serialize;

/// Parsed form of one `CREATE TABLE` statement. Fields keep source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    pub table_name: String,
    pub fields: Vec<FieldMetadata>,
    /// Table-level `COMMENT` option, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TableMetadata {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
            comment: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn enum_fields(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.fields.iter().filter(|f| f.is_enum())
    }
}
