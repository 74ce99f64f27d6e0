//! Validator entry point
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use tracing::{info, instrument};

use super::dispatch::Dispatcher;
use super::types::{ValidationMode, ValidationReport, ValidatorConfig};
use crate::error::Result;
use crate::rules::RuleRegistry;
use crate::schema::{extract_field_rules, FieldNaming, Record};

/// Validates one record against the rules declared on its fields
///
/// A validator is created per request and holds nothing beyond the record,
/// its configuration and a borrowed registry.
pub struct Validator<'a> {
    record: &'a dyn Record,
    config: ValidatorConfig,
    registry: &'a RuleRegistry,
}

impl<'a> Validator<'a> {
    /// Create a validator over the built-in rules
    pub fn new(record: &'a dyn Record, fail_silently: bool) -> Self {
        Self::with_config(record, ValidatorConfig::from_fail_silently(fail_silently))
    }

    /// Create a validator with explicit configuration
    pub fn with_config(record: &'a dyn Record, config: ValidatorConfig) -> Self {
        Self {
            record,
            config,
            registry: RuleRegistry::builtin(),
        }
    }

    /// Resolve rule names through `registry` instead of the built-ins
    pub fn with_registry(mut self, registry: &'a RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.config.naming = naming;
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.config.mode
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run every rule of every field
    ///
    /// Returns the report when there are no violations, or when every
    /// violation was silenced. Returns the first fatal error otherwise:
    /// configuration errors in either mode, `Error::Validation` in strict mode.
    #[instrument(skip(self), fields(mode = %self.config.mode, naming = ?self.config.naming))]
    pub fn validate(&self) -> Result<ValidationReport> {
        let rules = extract_field_rules(self.record, self.config.naming)?;
        let report = Dispatcher::new(self.registry, self.config).dispatch(self.record, &rules)?;

        info!(
            fields = report.fields_checked,
            rules = report.rules_evaluated,
            violations = report.violations.len(),
            truncated = report.truncated,
            "Validation completed"
        );
        Ok(report)
    }
}

/// Validate `record` against the built-in rules
pub fn validate(record: &dyn Record, fail_silently: bool) -> Result<ValidationReport> {
    Validator::new(record, fail_silently).validate()
}
