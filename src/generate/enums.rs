use super::*;
use itertools::Itertools;

pub const ENUMS_FILE: &str = "enums.ts";

/// TypeScript enum type name for an enum column: the column name upper-cased.
pub fn enum_type_name(field: &FieldMetadata) -> String {
    field.name().to_uppercase()
}

fn value_set(field: &FieldMetadata) -> Vec<String> {
    field
        .enum_values()
        .unwrap_or_default()
        .iter()
        .cloned()
        .sorted()
        .collect()
}

/// Enum member for a literal: upper-cased, spaces replaced by `_`.
pub fn enum_member(value: &str) -> String {
    value.to_uppercase().replace(' ', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    /// Sorted, de-duplicated literals.
    pub values: Vec<String>,
}

impl EnumDefinition {
    pub fn render(&self) -> String {
        let members = self
            .values
            .iter()
            .map(|v| format!("    {} = {},\n", enum_member(v), double_quoted(v)))
            .join("");
        format!("export enum {} {{\n{members}}}", self.name)
    }
}

/// Every enum used across a set of tables.
///
/// Columns with the same value set share one enum, named after the first
/// column seen with that set. Distinct value sets whose columns share a name
/// are merged into a single enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumCatalog {
    enums: Vec<EnumDefinition>,
    /// Sorted value set -> name of the enum that declares it.
    names: Vec<(Vec<String>, String)>,
}

impl EnumCatalog {
    pub fn collect(tables: &[TableMetadata]) -> Self {
        let mut names: Vec<(Vec<String>, String)> = Vec::new();
        for field in tables.iter().flat_map(TableMetadata::enum_fields) {
            let key = value_set(field);
            if !names.iter().any(|(seen, _)| *seen == key) {
                names.push((key, enum_type_name(field)));
            }
        }

        let mut enums: Vec<EnumDefinition> = Vec::new();
        for (values, name) in &names {
            match enums.iter_mut().find(|e| e.name == *name) {
                Some(existing) => existing.values.extend(values.iter().cloned()),
                None => enums.push(EnumDefinition {
                    name: name.clone(),
                    values: values.clone(),
                }),
            }
        }
        for definition in &mut enums {
            definition.values.sort();
            definition.values.dedup();
        }
        Self { enums, names }
    }

    /// Name of the enum declared for `field`'s value set. A field the catalog
    /// was not built from falls back to its own upper-cased name.
    pub fn type_name(&self, field: &FieldMetadata) -> String {
        let key = value_set(field);
        self.names
            .iter()
            .find(|(values, _)| *values == key)
            .map_or_else(|| enum_type_name(field), |(_, name)| name.clone())
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Contents of `enums.ts`: one block per enum, blank line between.
    pub fn render(&self) -> String {
        self.enums.iter().map(EnumDefinition::render).join("\n\n")
    }
}
