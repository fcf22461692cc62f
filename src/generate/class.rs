use super::*;
use itertools::Itertools;

/// `users` -> `Users`, `user_roles` -> `User_roles`.
pub fn class_name(table_name: &str) -> String {
    let mut chars = table_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// TypeScript type of a column. Enum columns use the enum `catalog`
/// declares for their value set.
pub fn ts_type(field: &FieldMetadata, catalog: &EnumCatalog) -> String {
    match field.field_type() {
        FieldType::Varchar | FieldType::Text => "string".into(),
        FieldType::Int | FieldType::Integer | FieldType::Real => "number".into(),
        FieldType::Boolean => "boolean".into(),
        FieldType::Timestamp => "Date".into(),
        FieldType::Enum => catalog.type_name(field),
    }
}

/// Default value expression used by `getMetadata()`.
fn ts_default(field: &FieldMetadata, catalog: &EnumCatalog) -> String {
    let default = field.default_value();
    match field.field_type() {
        FieldType::Enum => default
            .or_else(|| field.enum_values().and_then(|v| v.first()).map(String::as_str))
            .map(|value| format!("{}.{}", catalog.type_name(field), enum_member(value)))
            .unwrap_or_else(|| "undefined".into()),
        FieldType::Timestamp if default == Some(Keyword::CurrentTimestamp.as_str()) => {
            double_quoted("now")
        }
        FieldType::Varchar | FieldType::Text | FieldType::Timestamp => {
            default.map_or_else(|| "undefined".into(), double_quoted)
        }
        FieldType::Int | FieldType::Integer | FieldType::Real | FieldType::Boolean => {
            default.unwrap_or("undefined").to_string()
        }
    }
}

/// Generates one TypeScript class per table, honouring `extends` relations.
pub struct ClassGenerator<'a> {
    tables: &'a [TableMetadata],
    inheritance: &'a Inheritance,
    catalog: &'a EnumCatalog,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(
        tables: &'a [TableMetadata],
        inheritance: &'a Inheritance,
        catalog: &'a EnumCatalog,
    ) -> Self {
        Self {
            tables,
            inheritance,
            catalog,
        }
    }

    fn table(&self, name: &str) -> Option<&'a TableMetadata> {
        self.tables.iter().find(|t| t.table_name == name)
    }

    /// One `<Class>.ts` per table with fields. A child table is emitted as a
    /// subclass holding only the fields its parent lacks; it replaces the
    /// plain class of the same name.
    pub fn generate(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = Vec::new();

        for table in self.tables.iter().filter(|t| !t.fields.is_empty()) {
            let path = format!("{}.ts", class_name(&table.table_name));
            if files.iter().any(|f| f.path.as_os_str() == path.as_str()) {
                continue;
            }
            let fields: Vec<_> = table.fields.iter().collect();
            files.push(GeneratedFile::new(path, self.render(table, &fields, None)));
        }

        for (child_name, parent_name) in self.inheritance.iter() {
            let Some(parent) = self.table(parent_name).filter(|t| !t.fields.is_empty()) else {
                warn!("Cannot find fields of parent table {parent_name:?}");
                continue;
            };
            let Some(child) = self.table(child_name).filter(|t| !t.fields.is_empty()) else {
                warn!("Cannot find fields of child table {child_name:?}");
                continue;
            };

            let own_fields: Vec<_> = child
                .fields
                .iter()
                .filter(|f| parent.field(f.name()).is_none())
                .collect();
            if own_fields.is_empty() {
                continue;
            }

            let path = format!("{}.ts", class_name(child_name));
            let contents = self.render(child, &own_fields, Some(parent));
            match files.iter_mut().find(|f| f.path.as_os_str() == path.as_str()) {
                Some(existing) => existing.contents = contents,
                None => files.push(GeneratedFile::new(path, contents)),
            }
        }
        files
    }

    /// Class body for `table`, declaring `fields` (all of them, or only the
    /// ones a parent does not provide).
    fn render(
        &self,
        table: &TableMetadata,
        fields: &[&FieldMetadata],
        parent: Option<&TableMetadata>,
    ) -> String {
        let name = class_name(&table.table_name);
        let parent_class = parent.map(|p| class_name(&p.table_name));
        let mut out = Vec::new();

        let enums: Vec<String> = table
            .enum_fields()
            .map(|f| self.catalog.type_name(f))
            .sorted()
            .dedup()
            .collect();
        if !enums.is_empty() {
            let members = enums.iter().map(|e| format!("  {e},\n")).join("");
            out.push(format!("import {{\n{members}}} from \"./enums\";"));
        }
        if let Some(parent_class) = &parent_class {
            out.push(format!("import {{ {parent_class} }} from './{parent_class}';"));
        }
        if let Some(comment) = &table.comment {
            out.push(format!("/** {comment} */"));
        }

        out.push(match &parent_class {
            Some(parent_class) => format!("export class {name} extends {parent_class} {{"),
            None => format!("export class {name} {{"),
        });
        for field in fields {
            let declaration = format!("  {}: {};", field.name(), ts_type(field, self.catalog));
            out.push(match field.comment() {
                Some(comment) => format!("{declaration}  // {comment}"),
                None => declaration,
            });
        }
        out.push(constructor(
            parent.map(|p| &p.fields[..]).unwrap_or_default(),
            fields,
            self.catalog,
        ));
        out.push(metadata_method(&name, table, self.catalog));
        out.push("}".into());
        out.join("\n")
    }
}

fn constructor(
    parent_fields: &[FieldMetadata],
    own_fields: &[&FieldMetadata],
    catalog: &EnumCatalog,
) -> String {
    let params = parent_fields
        .iter()
        .chain(own_fields.iter().copied())
        .map(|f| format!("{}: {}", f.name(), ts_type(f, catalog)))
        .join(", ");

    let mut body = String::new();
    if !parent_fields.is_empty() {
        let names = parent_fields.iter().map(FieldMetadata::name).join(", ");
        body.push_str(&format!("    super({names});\n"));
    }
    for field in own_fields {
        body.push_str(&format!("    this.{0} = {0};\n", field.name()));
    }
    format!("  constructor({params}) {{\n{body}  }}")
}

fn metadata_method(class_name: &str, table: &TableMetadata, catalog: &EnumCatalog) -> String {
    let entries = table
        .fields
        .iter()
        .map(|field| {
            let mut entry = format!(
                "        {{ 'name': {}, 'type': {}, 'default': {}, 'comment': {}",
                single_quoted(field.name()),
                single_quoted(&ts_type(field, catalog)),
                ts_default(field, catalog),
                single_quoted(field.comment().unwrap_or_default()),
            );
            if field.is_auto_increment() {
                entry.push_str(", 'auto_increase': 'AUTO_INCREMENT'");
            }
            entry.push_str(" },");
            entry
        })
        .join("\n");

    format!(
        "  static getMetadata(): object {{\n    return {{\n      'class_name': {},\n      'fields': [\n{entries}\n      ]}};\n  }}",
        single_quoted(class_name)
    )
}
