//! Fieldguard Core - Declarative field validation for structured records
//!
//! Records declare, per field, a comma-separated list of rule names. The
//! validator extracts that metadata, resolves each name through a rule
//! registry and evaluates the field's current value against it.
//!
//! # Main Components
//!
//! - **Values**: `FieldValue` and the `FromFieldValue` conversions rules consume
//! - **Schemas**: typed `Schema<T>` accessors and JSON-loaded `RecordSchema`s
//! - **Extractor**: builds the declaration-ordered `FieldRuleMap`
//! - **Rules**: the `Rule` trait, the built-in rules and `RuleRegistry`
//! - **Validator**: strict and silent error policies over the dispatcher
//!
//! # Example
//!
//! ```
//! use fieldguard_core::{FieldDecl, RecordSchema, Validator};
//! use serde_json::json;
//!
//! let schema = RecordSchema::new("Product")
//!     .with_field(FieldDecl::new("Quantity").rules("positiveNumberField"))
//!     .with_field(FieldDecl::new("Slug").rules("slugField"));
//! let doc = json!({"Quantity": -1, "Slug": "test-slug"});
//! let record = schema.bind(&doc);
//!
//! // Strict: the first violation is an error
//! assert!(Validator::new(&record, false).validate().is_err());
//!
//! // Silent: violations are logged and collected
//! let report = Validator::new(&record, true).validate().unwrap();
//! assert_eq!(report.violations.len(), 1);
//! ```

pub mod error;
pub mod value;
pub mod schema;
pub mod rules;
pub mod validator;

// Re-export main types for convenience
pub use error::{Error, ErrorClass, Result};
pub use value::{FieldValue, FromFieldValue, ValueKind};
pub use schema::{
    // Record model
    BoundField, FieldDecl, FieldNaming, Record,

    // Schemas
    DynamicRecord, FieldSchema, RecordSchema, Schema, Schematic,

    // Metadata extraction
    extract_field_rules, FieldRuleMap, FieldRules,
};
pub use rules::{rule_fn, Rule, RuleInfo, RuleOutcome, RuleRegistry, RuleResult};
pub use validator::{
    validate, Dispatcher, ValidationError, ValidationMode, ValidationReport, Validator,
    ValidatorConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
