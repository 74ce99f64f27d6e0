//! Rule dispatch
//!
//! Resolves each rule name of each field through the registry and applies
//! the error reporting policy to the outcome.
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use tracing::{debug, warn};

use super::types::{ValidationError, ValidationReport, ValidatorConfig};
use crate::error::{Error, Result};
use crate::rules::{RuleOutcome, RuleRegistry};
use crate::schema::{FieldRuleMap, FieldRules, Record};

/// Evaluates a field rule map against the values captured at extraction
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r RuleRegistry,
    config: ValidatorConfig,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r RuleRegistry, config: ValidatorConfig) -> Self {
        Self { registry, config }
    }

    /// Check every rule of every field in `rules`, in order
    ///
    /// # Errors
    ///
    /// - `Error::UnknownRule` / `Error::TypeMismatch` in either mode
    /// - `Error::Validation` for the first violation in strict mode
    pub fn dispatch(&self, record: &dyn Record, rules: &FieldRuleMap) -> Result<ValidationReport> {
        let mut report = ValidationReport::new(self.config.mode);
        report.record_kind = record.kind();

        for entry in rules {
            self.dispatch_field(entry, &mut report)?;
            report.fields_checked += 1;
        }

        Ok(report)
    }

    fn dispatch_field(
        &self,
        entry: &FieldRules,
        report: &mut ValidationReport,
    ) -> Result<()> {
        for rule_name in entry.rule_names() {
            let rule = self.registry.get(rule_name).ok_or_else(|| Error::UnknownRule {
                field: entry.name.clone(),
                rule: rule_name.to_string(),
            })?;

            report.rules_evaluated += 1;
            match rule.evaluate(&entry.value) {
                RuleOutcome::Passed => {
                    debug!(field = %entry.name, rule = rule_name, "Rule passed");
                }
                RuleOutcome::Violated(message) => {
                    let violation = ValidationError::new(
                        entry.name.as_str(),
                        rule_name,
                        message,
                        self.config.mode.is_silent(),
                    );
                    self.report_violation(violation, report)?;
                }
                RuleOutcome::TypeMismatch { expected, actual } => {
                    return Err(Error::TypeMismatch {
                        field: entry.name.clone(),
                        rule: rule_name.to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }

        Ok(())
    }

    /// Strict: escalate. Silent: log, then record unless the cap is reached.
    fn report_violation(&self, violation: ValidationError, report: &mut ValidationReport) -> Result<()> {
        if !violation.silent {
            return Err(Error::Validation(violation));
        }

        warn!(
            field = %violation.field,
            rule = %violation.rule,
            message = %violation.message,
            "Validation failed"
        );

        if self.config.limit_reached(report.violations.len()) {
            report.truncated = true;
        } else {
            report.violations.push(violation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{extract_field_rules, FieldDecl, FieldNaming, RecordSchema};
    use serde_json::json;

    fn schema() -> RecordSchema {
        RecordSchema::new("Item")
            .with_field(FieldDecl::new("Count").rules("positiveNumberField"))
            .with_field(FieldDecl::new("Handle").rules("slugField").rules("required"))
    }

    #[test]
    fn test_counts_fields_and_rules() {
        let schema = schema();
        let doc = json!({"Count": 2, "Handle": "ok"});
        let record = schema.bind(&doc);
        let map = extract_field_rules(&record, FieldNaming::Declared).unwrap();

        let report = Dispatcher::new(RuleRegistry::builtin(), ValidatorConfig::strict())
            .dispatch(&record, &map)
            .unwrap();
        assert!(report.is_valid());
        assert_eq!(report.fields_checked, 2);
        assert_eq!(report.rules_evaluated, 3);
    }

    #[test]
    fn test_silent_cap_truncates() {
        let schema = schema();
        let doc = json!({"Count": -2, "Handle": "NOPE"});
        let record = schema.bind(&doc);
        let map = extract_field_rules(&record, FieldNaming::Declared).unwrap();

        let config = ValidatorConfig::silent().with_max_violations(1);
        let report = Dispatcher::new(RuleRegistry::builtin(), config)
            .dispatch(&record, &map)
            .unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].field, "Count");
        assert!(report.truncated);
        // Checking continues past the cap
        assert_eq!(report.fields_checked, 2);
    }

    #[test]
    fn test_empty_registry_rejects_every_rule() {
        let schema = schema();
        let doc = json!({"Count": 1, "Handle": "ok"});
        let record = schema.bind(&doc);
        let map = extract_field_rules(&record, FieldNaming::Declared).unwrap();

        let registry = RuleRegistry::new();
        let err = Dispatcher::new(&registry, ValidatorConfig::silent())
            .dispatch(&record, &map)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownRule { rule, .. } if rule == "positiveNumberField"));
    }
}
