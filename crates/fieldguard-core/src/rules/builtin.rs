//! Built-in rules
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use super::types::{Rule, RuleResult};
use crate::value::FieldValue;

pub const REQUIRED: &str = "required";
pub const POSITIVE_NUMBER_FIELD: &str = "positiveNumberField";
pub const NAME_FIELD: &str = "nameField";
pub const ALWAYS_TRUE_FIELD: &str = "alwaysTrueField";
pub const SLUG_FIELD: &str = "slugField";

/// Value must not be null
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    type Input = FieldValue;

    fn check(&self, value: &FieldValue) -> RuleResult {
        if value.is_null() {
            return Err("required field cannot be empty".to_string());
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "value must be present (not null)"
    }
}

/// Integer must not be negative
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveNumber;

impl Rule for PositiveNumber {
    type Input = i64;

    fn check(&self, value: &i64) -> RuleResult {
        if *value < 0 {
            return Err("positive number field must be zero or greater".to_string());
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "integer must be zero or greater"
    }
}

/// String must contain at least two words separated by single spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct NameField;

impl Rule for NameField {
    type Input = String;

    fn check(&self, value: &String) -> RuleResult {
        // Split on every single space, so "a  b" yields three tokens
        if value.split(' ').count() < 2 {
            return Err("name field must contain at least 2 words".to_string());
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "string must contain at least two space-separated words"
    }
}

/// Boolean must be true
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTrue;

impl Rule for AlwaysTrue {
    type Input = bool;

    fn check(&self, value: &bool) -> RuleResult {
        if !*value {
            return Err("always true field must be true".to_string());
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "boolean must be true"
    }
}

/// String must not contain uppercase letters
///
/// Uppercase means the Unicode `Uppercase` derived property (`char::is_uppercase`),
/// which also covers characters such as `'Ⓐ'` outside general category `Lu`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slug;

impl Rule for Slug {
    type Input = String;

    fn check(&self, value: &String) -> RuleResult {
        if value.chars().any(char::is_uppercase) {
            return Err("slug field must contain only lowercase letters".to_string());
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "string must not contain uppercase letters"
    }
}
