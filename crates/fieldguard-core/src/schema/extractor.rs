//! Metadata extraction: record schema -> field rule map
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use std::collections::HashSet;
use tracing::trace;

use super::types::{FieldNaming, Record};
use crate::error::{Error, Result};
use crate::value::{FieldValue, ValueKind};

/// Rule tags attached to one field, with the value read at extraction
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    /// Name under the active naming policy
    pub name: String,
    /// Declared name, used for value lookup
    pub declared_name: String,
    /// Raw tags in declaration order
    pub tags: Vec<String>,
    /// Field value, read once per validation
    pub value: FieldValue,
}

impl FieldRules {
    /// Individual rule names across all tags, in order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().flat_map(|tag| split_rule_tag(tag))
    }
}

/// Field name -> raw rule tags, in field declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRuleMap {
    entries: Vec<FieldRules>,
}

impl FieldRuleMap {
    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRules> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of individual rule names
    pub fn rule_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.rule_names().count()).sum()
    }
}

impl<'a> IntoIterator for &'a FieldRuleMap {
    type Item = &'a FieldRules;
    type IntoIter = std::slice::Iter<'a, FieldRules>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Split a raw tag into rule names, trimming whitespace and skipping empty
/// segments
pub fn split_rule_tag(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// Build the field rule map for `record`
///
/// # Errors
///
/// - `Error::NonStruct` when the record is not a structured aggregate
/// - `Error::DuplicateField` when two fields resolve to the same name
pub fn extract_field_rules(record: &dyn Record, naming: FieldNaming) -> Result<FieldRuleMap> {
    let kind = record.kind();
    if kind != ValueKind::Struct {
        return Err(Error::NonStruct { kind });
    }

    let fields = record.fields();
    let mut seen = HashSet::with_capacity(fields.len());
    let mut entries = Vec::with_capacity(fields.len());

    for field in fields {
        let name = field.decl.reported_name(naming).to_string();
        if !seen.insert(name.clone()) {
            return Err(Error::DuplicateField { name });
        }

        trace!(field = %name, tags = ?field.decl.tags, "Extracted field rules");
        entries.push(FieldRules {
            name,
            declared_name: field.decl.name,
            tags: field.decl.tags,
            value: field.value,
        });
    }

    Ok(FieldRuleMap { entries })
}
