//! Rule registry
//!
//! Maps rule names to erased rules. The built-in registry is built once and
//! shared read-only; callers that need extra rules start from
//! `RuleRegistry::with_builtins()` and register their own.
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

use super::builtin::{
    AlwaysTrue, NameField, PositiveNumber, Required, Slug, ALWAYS_TRUE_FIELD, NAME_FIELD,
    POSITIVE_NUMBER_FIELD, REQUIRED, SLUG_FIELD,
};
use super::types::{rule_fn, ErasedRule, Rule, RuleOutcome, RuleResult};
use crate::error::{Error, Result};
use crate::value::{FieldValue, FromFieldValue, ValueKind};

static BUILTIN: OnceLock<RuleRegistry> = OnceLock::new();

/// A rule as stored in the registry
#[derive(Clone)]
pub struct RegisteredRule {
    name: String,
    rule: Arc<dyn ErasedRule>,
}

impl RegisteredRule {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind the rule accepts; `None` accepts every kind
    pub fn accepts(&self) -> Option<ValueKind> {
        self.rule.accepts()
    }

    pub fn description(&self) -> &str {
        self.rule.description()
    }

    /// Evaluate the rule against a runtime value
    pub fn evaluate(&self, value: &FieldValue) -> RuleOutcome {
        self.rule.evaluate(value)
    }
}

impl fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("name", &self.name)
            .field("accepts", &self.accepts())
            .finish()
    }
}

/// Listing entry for a registered rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub name: String,
    /// Accepted kind, or `"any"`
    pub accepts: String,
    pub description: String,
}

/// Rule name -> rule
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RegisteredRule>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in rules
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(REQUIRED, Required);
        registry.insert(POSITIVE_NUMBER_FIELD, PositiveNumber);
        registry.insert(NAME_FIELD, NameField);
        registry.insert(ALWAYS_TRUE_FIELD, AlwaysTrue);
        registry.insert(SLUG_FIELD, Slug);
        registry
    }

    /// Shared, immutable built-in registry
    pub fn builtin() -> &'static RuleRegistry {
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Register a rule under `name`
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateRule` if the name is taken, or
    /// `Error::InvalidRuleName` if it is empty, padded or contains a comma.
    pub fn register<R: Rule>(&mut self, name: impl Into<String>, rule: R) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() || name.contains(',') || name.trim() != name {
            return Err(Error::InvalidRuleName { name });
        }
        if self.rules.contains_key(&name) {
            return Err(Error::DuplicateRule { name });
        }

        debug!(rule = %name, accepts = ?R::Input::expected_kind(), "Registering rule");
        self.insert(name, rule);
        Ok(())
    }

    /// Register a typed closure under `name`
    pub fn register_fn<T, F>(&mut self, name: impl Into<String>, check: F) -> Result<()>
    where
        T: FromFieldValue + 'static,
        F: Fn(&T) -> RuleResult + Send + Sync + 'static,
    {
        self.register(name, rule_fn(check))
    }

    fn insert<R: Rule>(&mut self, name: impl Into<String>, rule: R) {
        let name = name.into();
        self.rules.insert(
            name.clone(),
            RegisteredRule {
                name,
                rule: Arc::new(rule),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Listing entries, sorted by name
    pub fn entries(&self) -> Vec<RuleInfo> {
        self.rules
            .values()
            .map(|rule| RuleInfo {
                name: rule.name.clone(),
                accepts: rule
                    .accepts()
                    .map_or_else(|| "any".to_string(), |kind| kind.to_string()),
                description: rule.description().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.keys()).finish()
    }
}
