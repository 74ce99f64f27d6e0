//! Error types for the Fieldguard core library
//!
//! This module defines the error taxonomy for validation runs using thiserror.
//! Configuration errors (non-struct input, unknown rules, type mismatches,
//! duplicate registrations) are always surfaced to the caller. Data errors
//! (`Error::Validation`) only surface in strict mode.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

use crate::validator::ValidationError;
use crate::value::ValueKind;

/// Main error type for Fieldguard operations
#[derive(Error, Debug)]
pub enum Error {
    /// The validated value is not a structured aggregate
    #[error("Non struct types can not be validated: {kind}")]
    NonStruct {
        kind: ValueKind,
    },

    /// A declared rule tag has no registered handler
    #[error("Unknown rule '{rule}' declared on field '{field}'")]
    UnknownRule {
        field: String,
        rule: String,
    },

    /// A rule ran against a value of an incompatible kind
    #[error("Rule '{rule}' on field '{field}' expects {expected} but found {actual}")]
    TypeMismatch {
        field: String,
        rule: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A field value violated its declared rule (strict mode only)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A rule name was registered twice
    #[error("Rule '{name}' is already registered")]
    DuplicateRule {
        name: String,
    },

    /// A rule name that could never be matched by a rule tag
    #[error("Invalid rule name '{name}'")]
    InvalidRuleName {
        name: String,
    },

    /// Two fields resolve to the same reported name
    #[error("Field '{name}' is declared more than once")]
    DuplicateField {
        name: String,
    },

    /// A record schema document could not be parsed
    #[error("Invalid record schema: {message}")]
    Schema {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// Programmer or schema misconfiguration, never silenced
    Configuration,
    /// A field value broke one of its rules
    Data,
}

impl Error {
    /// Create a schema parsing error without an underlying cause
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
            source: None,
        }
    }

    /// Classify this error
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) => ErrorClass::Data,
            _ => ErrorClass::Configuration,
        }
    }

    /// True for errors that must escalate regardless of the silence flag
    pub fn is_configuration_error(&self) -> bool {
        self.class() == ErrorClass::Configuration
    }

    /// The field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownRule { field, .. } | Self::TypeMismatch { field, .. } => Some(field),
            Self::Validation(err) => Some(&err.field),
            Self::DuplicateField { name } => Some(name),
            Self::NonStruct { .. }
            | Self::DuplicateRule { .. }
            | Self::InvalidRuleName { .. }
            | Self::Schema { .. } => None,
        }
    }

    /// The rule this error refers to, if any
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::UnknownRule { rule, .. } | Self::TypeMismatch { rule, .. } => Some(rule),
            Self::Validation(err) => Some(&err.rule),
            Self::DuplicateRule { name } | Self::InvalidRuleName { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorClass::Configuration => write!(f, "configuration"),
            ErrorClass::Data => write!(f, "data"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Schema {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NonStruct { kind: ValueKind::Int };
        assert_eq!(err.to_string(), "Non struct types can not be validated: int");

        let err = Error::UnknownRule {
            field: "Slug".to_string(),
            rule: "bogusRule".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown rule 'bogusRule' declared on field 'Slug'");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::TypeMismatch {
            field: "Quantity".to_string(),
            rule: "slugField".to_string(),
            expected: ValueKind::String,
            actual: ValueKind::Int,
        };
        assert_eq!(
            err.to_string(),
            "Rule 'slugField' on field 'Quantity' expects string but found int"
        );
        assert_eq!(err.field(), Some("Quantity"));
        assert_eq!(err.rule(), Some("slugField"));
    }

    #[test]
    fn test_error_classification() {
        let violation = ValidationError::new("Quantity", "positiveNumberField", "must be zero or greater", false);
        assert_eq!(Error::from(violation).class(), ErrorClass::Data);
        assert!(Error::NonStruct { kind: ValueKind::List }.is_configuration_error());
        assert!(Error::DuplicateRule { name: "required".into() }.is_configuration_error());
    }
}
