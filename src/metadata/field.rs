use super::*;
use serde::Serialize;

/// One parsed column definition, frozen.
///
/// Only `FieldBuilder::build` creates these, which guarantees:
/// - `name` is non-empty and `field_type` is set,
/// - `length` is only present on `VARCHAR` fields,
/// - `enum_value` is present exactly on `enum` fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldMetadata {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enum_value: Option<Vec<String>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    auto_increment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl FieldMetadata {
    /// Start accumulating a field with the given name.
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        let mut builder = FieldBuilder::default();
        builder.name(name);
        builder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }

    /// Default value with quotes stripped, or `CURRENT_TIMESTAMP`.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Enum literals in source order.
    pub fn enum_values(&self) -> Option<&[String]> {
        self.enum_value.as_deref()
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_enum(&self) -> bool {
        self.field_type == FieldType::Enum
    }
}

/// Mutable accumulator filled in while the field-list parser walks a column
/// definition. Every attribute is optional until `build`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldBuilder {
    name: Option<String>,
    field_type: Option<FieldType>,
    length: Option<String>,
    default: Option<String>,
    enum_values: Option<Vec<String>>,
    auto_increment: bool,
    comment: Option<String>,
}

impl FieldBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn field_type(&mut self, field_type: FieldType) -> &mut Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn current_type(&self) -> Option<FieldType> {
        self.field_type
    }

    pub fn length(&mut self, length: impl Into<String>) -> &mut Self {
        self.length = Some(length.into());
        self
    }

    pub fn default_value(&mut self, default: impl Into<String>) -> &mut Self {
        self.default = Some(default.into());
        self
    }

    /// Marks the field as `enum` and records its literals.
    pub fn enum_values(&mut self, values: Vec<String>) -> &mut Self {
        self.field_type = Some(FieldType::Enum);
        self.enum_values = Some(values);
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment = true;
        self
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    /// Freeze the accumulated attributes.
    ///
    /// Hands the builder back when the name is missing or empty, or no type
    /// was seen.
    /// Empty lengths and comments are dropped, as are attributes that do not
    /// belong to the final type. An empty default (`DEFAULT ''`) is kept.
    pub fn build(self) -> Result<FieldMetadata, Self> {
        let (Some(name), Some(field_type)) = (
            self.name.clone().filter(|n| !n.is_empty()),
            self.field_type,
        ) else {
            return Err(self);
        };
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());

        Ok(FieldMetadata {
            name,
            field_type,
            length: non_empty(self.length).filter(|_| field_type.takes_length()),
            default: self.default,
            enum_value: self.enum_values.filter(|_| field_type == FieldType::Enum),
            auto_increment: self.auto_increment,
            comment: non_empty(self.comment),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_name_and_type() {
        assert!(FieldBuilder::default().build().is_err());
        let mut untyped = FieldMetadata::builder("id");
        untyped.auto_increment();
        assert_eq!(untyped.clone().build(), Err(untyped));

        let mut unnamed = FieldMetadata::builder("");
        unnamed.field_type(FieldType::Int);
        assert!(unnamed.build().is_err());
    }

    #[test]
    fn build_drops_attributes_foreign_to_the_type() {
        let mut b = FieldMetadata::builder("title");
        b.field_type(FieldType::Varchar).length("40");
        b.enum_values(vec!["a".into()]);
        let field = b.build().expect("builds");
        assert_eq!(field.field_type(), FieldType::Enum);
        assert_eq!(field.length(), None);
        assert_eq!(field.enum_values(), Some(&["a".to_string()][..]));

        let mut b = FieldMetadata::builder("count");
        b.field_type(FieldType::Int).length("11");
        let field = b.build().expect("builds");
        assert_eq!(field.length(), None);
        assert_eq!(field.enum_values(), None);
    }

    #[test]
    fn build_drops_empty_comment_keeps_empty_default() {
        let mut b = FieldMetadata::builder("note");
        b.field_type(FieldType::Text).comment("").default_value("");
        let field = b.build().expect("builds");
        assert_eq!(field.comment(), None);
        assert_eq!(field.default_value(), Some(""));
    }

    #[test]
    fn serializes_only_present_attributes() {
        let mut b = FieldMetadata::builder("id");
        b.field_type(FieldType::Int).auto_increment();
        let json = serde_json::to_value(b.build().expect("builds")).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({ "name": "id", "type": "INT", "auto_increment": true })
        );

        let mut b = FieldMetadata::builder("status");
        b.enum_values(vec!["on".into(), "off".into()]).default_value("on");
        let json = serde_json::to_value(b.build().expect("builds")).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "status",
                "type": "enum",
                "default": "on",
                "enum_value": ["on", "off"],
            })
        );
    }
}
