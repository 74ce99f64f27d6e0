//! Serde-loaded record schemas over JSON documents
//!
//! Used when the record shape is only known at runtime, e.g. a record file
//! paired with a schema file:
//!
//! ```yaml
//! name: Product
//! fields:
//!   - name: ProductID
//!     alias: productId
//!     validate: "required,positiveNumberField"
//!   - name: Slug
//!     validate: ["slugField"]
//! ```
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::types::{BoundField, FieldDecl, Record};
use crate::error::{Error, Result};
use crate::value::{FieldValue, ValueKind};

/// Rule tags of one field: a single comma-separated string or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleTags {
    One(String),
    Many(Vec<String>),
}

impl Default for RuleTags {
    fn default() -> Self {
        RuleTags::Many(Vec::new())
    }
}

impl RuleTags {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            RuleTags::One(tag) => vec![tag],
            RuleTags::Many(tags) => tags,
        }
    }

    fn to_vec(&self) -> Vec<String> {
        self.clone().into_vec()
    }
}

/// Declaration of one field in a `RecordSchema`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub validate: RuleTags,
}

impl FieldSchema {
    pub fn to_decl(&self) -> FieldDecl {
        FieldDecl {
            name: self.name.clone(),
            alias: self.alias.clone(),
            tags: self.validate.to_vec(),
        }
    }
}

/// A named, declaration-ordered list of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration
    pub fn with_field(mut self, decl: FieldDecl) -> Self {
        self.fields.push(FieldSchema {
            name: decl.name,
            alias: decl.alias,
            validate: RuleTags::Many(decl.tags),
        });
        self
    }

    /// Parse a schema from a JSON document and check it
    pub fn from_json_str(input: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(input)?;
        schema.check()?;
        Ok(schema)
    }

    /// Parse a schema from an already-decoded JSON value and check it
    pub fn from_value(value: Value) -> Result<Self> {
        let schema: Self = serde_json::from_value(value)?;
        schema.check()?;
        Ok(schema)
    }

    /// Reject empty or repeated declared names
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(Error::schema(format!(
                    "schema '{}' declares a field with an empty name",
                    self.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(Error::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Pair this schema with a document
    pub fn bind<'a>(&'a self, value: &'a Value) -> DynamicRecord<'a> {
        DynamicRecord::new(self, value)
    }
}

/// A JSON document viewed through a `RecordSchema`
#[derive(Debug, Clone, Copy)]
pub struct DynamicRecord<'a> {
    schema: &'a RecordSchema,
    value: &'a Value,
}

impl<'a> DynamicRecord<'a> {
    pub fn new(schema: &'a RecordSchema, value: &'a Value) -> Self {
        Self { schema, value }
    }

    pub fn schema(&self) -> &RecordSchema {
        self.schema
    }

    /// Declared name first, then alias; absent keys read as null
    fn lookup(&self, field: &FieldSchema) -> FieldValue {
        let Some(object) = self.value.as_object() else {
            return FieldValue::Null;
        };

        object
            .get(&field.name)
            .or_else(|| field.alias.as_ref().and_then(|alias| object.get(alias)))
            .map(FieldValue::from)
            .unwrap_or(FieldValue::Null)
    }
}

impl Record for DynamicRecord<'_> {
    fn kind(&self) -> ValueKind {
        match self.value {
            Value::Object(_) => ValueKind::Struct,
            other => FieldValue::from(other).kind(),
        }
    }

    fn fields(&self) -> Vec<BoundField> {
        self.schema
            .fields
            .iter()
            .map(|field| BoundField {
                decl: field.to_decl(),
                value: self.lookup(field),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_schema() -> RecordSchema {
        RecordSchema::from_value(json!({
            "name": "Product",
            "fields": [
                {"name": "ProductID", "alias": "productId", "validate": "required,positiveNumberField"},
                {"name": "Slug", "validate": ["slugField"]},
                {"name": "Notes"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_rule_tags_accept_string_or_list() {
        let schema = product_schema();
        assert_eq!(schema.fields[0].validate, RuleTags::One("required,positiveNumberField".into()));
        assert_eq!(schema.fields[1].validate, RuleTags::Many(vec!["slugField".into()]));
        assert_eq!(schema.fields[2].validate, RuleTags::default());
    }

    #[test]
    fn test_lookup_falls_back_to_alias() {
        let schema = product_schema();
        let doc = json!({"productId": 7, "Slug": "abc"});
        let fields = schema.bind(&doc).fields();

        assert_eq!(fields[0].value, FieldValue::Int(7));
        assert_eq!(fields[1].value, FieldValue::Str("abc".into()));
        assert_eq!(fields[2].value, FieldValue::Null);
    }

    #[test]
    fn test_declared_name_wins_over_alias() {
        let schema = product_schema();
        let doc = json!({"ProductID": 1, "productId": 2});
        assert_eq!(schema.bind(&doc).fields()[0].value, FieldValue::Int(1));
    }

    #[test]
    fn test_non_object_kind() {
        let schema = product_schema();
        assert_eq!(schema.bind(&json!(5)).kind(), ValueKind::Int);
        assert_eq!(schema.bind(&json!([1])).kind(), ValueKind::List);
        assert_eq!(schema.bind(&json!({})).kind(), ValueKind::Struct);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = RecordSchema::from_json_str(
            r#"{"name": "Dup", "fields": [{"name": "a"}, {"name": "a"}]}"#,
        );
        assert!(matches!(result, Err(Error::DuplicateField { name }) if name == "a"));
    }

    #[test]
    fn test_malformed_schema() {
        let result = RecordSchema::from_json_str(r#"{"fields": 3}"#);
        assert!(matches!(result, Err(Error::Schema { .. })));
    }

    #[test]
    fn test_with_field_builder() {
        let schema = RecordSchema::new("Built")
            .with_field(FieldDecl::new("Quantity").rules("positiveNumberField"));
        assert_eq!(schema.fields[0].to_decl().tags, vec!["positiveNumberField".to_string()]);
    }
}
