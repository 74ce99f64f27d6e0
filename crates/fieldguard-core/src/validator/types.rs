//! Validation types: modes, configuration, violations and reports
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::schema::FieldNaming;
use crate::value::ValueKind;

/// How data violations are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// The first violation aborts the run
    #[default]
    Strict,
    /// Violations are logged and recorded; the run continues
    Silent,
}

impl ValidationMode {
    pub fn from_fail_silently(fail_silently: bool) -> Self {
        if fail_silently {
            ValidationMode::Silent
        } else {
            ValidationMode::Strict
        }
    }

    pub fn is_silent(&self) -> bool {
        *self == ValidationMode::Silent
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Silent => write!(f, "silent"),
        }
    }
}

/// One field value violating one rule
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Field '{field}' failed rule '{rule}': {message}")]
pub struct ValidationError {
    /// Field name under the active naming policy
    pub field: String,
    pub rule: String,
    pub message: String,
    /// Silence flag of the validator that produced this violation
    pub silent: bool,
}

impl ValidationError {
    pub fn new<F, R, M>(field: F, rule: R, message: M, silent: bool) -> Self
    where
        F: Into<String>,
        R: Into<String>,
        M: Into<String>,
    {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
            silent,
        }
    }
}

/// Validator settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub mode: ValidationMode,
    pub naming: FieldNaming,
    /// Stop recording after this many violations in silent mode (0 = unlimited)
    pub max_violations: usize,
}

impl ValidatorConfig {
    /// Create a configuration that aborts on the first violation
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::default()
        }
    }

    /// Create a configuration that records every violation
    pub fn silent() -> Self {
        Self {
            mode: ValidationMode::Silent,
            ..Self::default()
        }
    }

    pub fn from_fail_silently(fail_silently: bool) -> Self {
        Self {
            mode: ValidationMode::from_fail_silently(fail_silently),
            ..Self::default()
        }
    }

    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_max_violations(mut self, max_violations: usize) -> Self {
        self.max_violations = max_violations;
        self
    }

    /// True once `recorded` violations reach the configured cap
    pub fn limit_reached(&self, recorded: usize) -> bool {
        self.max_violations > 0 && recorded >= self.max_violations
    }
}

/// Outcome of a completed validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub record_kind: ValueKind,
    pub mode: ValidationMode,
    /// Recorded violations, in check order (silent mode only)
    pub violations: Vec<ValidationError>,
    pub fields_checked: usize,
    pub rules_evaluated: usize,
    /// True when recording stopped at `max_violations`
    pub truncated: bool,
}

impl ValidationReport {
    pub(crate) fn new(mode: ValidationMode) -> Self {
        Self {
            record_kind: ValueKind::Struct,
            mode,
            violations: Vec::new(),
            fields_checked: 0,
            rules_evaluated: 0,
            truncated: false,
        }
    }

    /// True when no violation was recorded
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations recorded for one field
    pub fn violations_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }
}
