//! Core schema types: field declarations, naming policy and the `Record` trait
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

use crate::value::{FieldValue, ValueKind};

/// Which name identifies a field in rule maps and reports
///
/// Value lookup always goes through the declared field; this only selects
/// the name callers see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldNaming {
    /// The field's declared name
    #[default]
    Declared,
    /// The serialization alias, falling back to the declared name
    Alias,
}

/// Schema-level metadata of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared field name
    pub name: String,
    /// Serialization alias
    pub alias: Option<String>,
    /// Raw rule tags, each a comma-separated list of rule names
    pub tags: Vec<String>,
}

impl FieldDecl {
    /// Declare a field with no alias and no rules
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            tags: Vec::new(),
        }
    }

    /// Set the serialization alias
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Append a raw rule tag such as `"required,positiveNumberField"`
    pub fn rules(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Name reported under the given naming policy
    pub fn reported_name(&self, naming: FieldNaming) -> &str {
        match naming {
            FieldNaming::Declared => &self.name,
            FieldNaming::Alias => self.alias.as_deref().unwrap_or(&self.name),
        }
    }

    /// True when at least one tag names a rule
    pub fn has_rules(&self) -> bool {
        self.tags.iter().any(|tag| tag.split(',').any(|name| !name.trim().is_empty()))
    }
}

/// A field declaration paired with the field's current value
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
    pub decl: FieldDecl,
    pub value: FieldValue,
}

impl BoundField {
    pub fn new(decl: FieldDecl, value: impl Into<FieldValue>) -> Self {
        Self {
            decl,
            value: value.into(),
        }
    }
}

/// A value that can be validated field by field
pub trait Record {
    /// Underlying kind. Anything other than `ValueKind::Struct` is rejected.
    fn kind(&self) -> ValueKind;

    /// Declared fields in declaration order, with their current values
    fn fields(&self) -> Vec<BoundField>;
}

/// Bare values are aggregates only when they hold a nested record, whose
/// entries carry no rules.
impl Record for FieldValue {
    fn kind(&self) -> ValueKind {
        FieldValue::kind(self)
    }

    fn fields(&self) -> Vec<BoundField> {
        match self {
            FieldValue::Record(entries) => entries
                .iter()
                .map(|(name, value)| BoundField::new(FieldDecl::new(name.clone()), value.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_name() {
        let decl = FieldDecl::new("ProductID").alias("productId");
        assert_eq!(decl.reported_name(FieldNaming::Declared), "ProductID");
        assert_eq!(decl.reported_name(FieldNaming::Alias), "productId");

        let bare = FieldDecl::new("Slug");
        assert_eq!(bare.reported_name(FieldNaming::Alias), "Slug");
    }

    #[test]
    fn test_has_rules() {
        assert!(!FieldDecl::new("a").has_rules());
        assert!(!FieldDecl::new("a").rules("").rules(" , ").has_rules());
        assert!(FieldDecl::new("a").rules("required").has_rules());
    }

    #[test]
    fn test_field_value_record() {
        assert_eq!(Record::kind(&FieldValue::Int(1)), ValueKind::Int);
        assert!(FieldValue::Int(1).fields().is_empty());

        let nested = FieldValue::Record(vec![("a".into(), FieldValue::Int(1))]);
        assert_eq!(Record::kind(&nested), ValueKind::Struct);
        let fields = nested.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].decl.name, "a");
        assert!(fields[0].decl.tags.is_empty());
    }
}
