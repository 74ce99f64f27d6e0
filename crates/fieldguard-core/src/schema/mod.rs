//! Record schemas and rule metadata extraction
//!
//! A record exposes its fields as an explicit, declaration-ordered list of
//! `FieldDecl`s paired with current values. There is no runtime type
//! introspection: typed structs describe themselves through `Schema<T>`,
//! and JSON documents are described by a `RecordSchema` loaded from disk.
//!
//! The module is organized into:
//! - `types`: `Record` trait, field declarations and naming policy
//! - `typed`: accessor-based schemas for Rust structs
//! - `dynamic`: serde-loaded schemas over `serde_json::Value` documents
//! - `extractor`: builds the `FieldRuleMap` consumed by the dispatcher
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod typed;
pub mod dynamic;
pub mod extractor;

pub use types::{BoundField, FieldDecl, FieldNaming, Record};
pub use typed::{Schema, Schematic};
pub use dynamic::{DynamicRecord, FieldSchema, RecordSchema, RuleTags};
pub use extractor::{extract_field_rules, split_rule_tag, FieldRuleMap, FieldRules};
