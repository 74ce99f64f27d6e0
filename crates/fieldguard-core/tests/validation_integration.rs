//! Integration tests for record validation
//!
//! This file covers:
//! - The product example over typed and JSON-backed records
//! - Strict and silent error policies
//! - Configuration errors that are never silenced
//! - Alias naming and custom registries

mod test_support;

use fieldguard_core::{
    validate, Error, ErrorClass, FieldDecl, FieldNaming, FieldValue, RecordSchema, RuleRegistry,
    ValidationMode, ValidatorConfig, Validator, ValueKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_support::{invalid_product, product_schema, valid_product, valid_product_json, Product};

// ============================================================================
// PRODUCT EXAMPLE
// ============================================================================

#[test]
fn test_product_example_passes() {
    let product = valid_product();

    assert!(validate(&product, false).unwrap().is_valid());
    assert!(validate(&product, true).unwrap().is_valid());
}

#[test]
fn test_product_example_from_json_passes() {
    let schema = product_schema();
    let doc = valid_product_json();
    let record = schema.bind(&doc);

    let report = validate(&record, false).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.record_kind, ValueKind::Struct);
    assert_eq!(report.fields_checked, 5);
}

#[test]
fn test_negative_quantity_strict_returns_violation() {
    let product = Product { quantity: -1, ..valid_product() };

    let err = validate(&product, false).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Data);
    assert_eq!(err.field(), Some("Quantity"));
    assert_eq!(err.rule(), Some("positiveNumberField"));
    assert_eq!(
        err.to_string(),
        "Field 'Quantity' failed rule 'positiveNumberField': positive number field must be zero or greater"
    );
}

#[test]
fn test_negative_quantity_silent_returns_report() {
    let product = Product { quantity: -1, ..valid_product() };

    let report = test_support::assert_silent_succeeds(&product);
    assert_eq!(report.mode, ValidationMode::Silent);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations_for("Quantity").count(), 1);
}

#[test]
fn test_typed_and_json_records_agree() {
    let schema = product_schema();
    let doc = json!({
        "ProductID": -1,
        "ProductName": "Widget",
        "Quantity": -10,
        "IsActive": false,
        "Slug": "Widget-Slug"
    });
    let record = schema.bind(&doc);

    let typed = validate(&invalid_product(), true).unwrap();
    let dynamic = validate(&record, true).unwrap();
    assert_eq!(typed.violations, dynamic.violations);
    assert_eq!(typed.violations.len(), 5);
}

// ============================================================================
// ERROR POLICY
// ============================================================================

#[test]
fn test_strict_reports_first_field_in_declaration_order() {
    let err = validate(&invalid_product(), false).unwrap_err();
    assert_eq!(err.field(), Some("ProductID"));
}

#[test]
fn test_silent_cap_marks_report_truncated() {
    let product = invalid_product();
    let config = ValidatorConfig::silent().with_max_violations(2);

    let report = Validator::with_config(&product, config).validate().unwrap();
    assert_eq!(report.violations.len(), 2);
    assert!(report.truncated);
    assert_eq!(report.fields_checked, 5);
}

#[test]
fn test_unknown_rule_is_configuration_error() {
    let schema = RecordSchema::new("Broken")
        .with_field(FieldDecl::new("Slug").rules("slugField"))
        .with_field(FieldDecl::new("Name").rules("bogusRule"));
    let doc = json!({"Slug": "Upper", "Name": "x"});
    let record = schema.bind(&doc);

    // Silent mode logs the slug violation, then stops at the unknown rule
    let err = validate(&record, true).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err.to_string(), "Unknown rule 'bogusRule' declared on field 'Name'");

    // Strict mode stops at the slug violation before reaching it
    let err = validate(&record, false).unwrap_err();
    assert_eq!(err.rule(), Some("slugField"));
}

#[test]
fn test_non_struct_inputs() {
    let schema = product_schema();
    let doc = json!(5);
    let record = schema.bind(&doc);

    for silent in [false, true] {
        assert!(matches!(
            validate(&record, silent),
            Err(Error::NonStruct { kind: ValueKind::Int })
        ));
        assert!(matches!(
            validate(&FieldValue::from(vec!["a", "b"]), silent),
            Err(Error::NonStruct { kind: ValueKind::List })
        ));
    }

    let err = validate(&FieldValue::Int(5), false).unwrap_err();
    assert_eq!(err.to_string(), "Non struct types can not be validated: int");
}

#[test]
fn test_float_does_not_satisfy_integer_rule() {
    let schema = RecordSchema::new("Measure")
        .with_field(FieldDecl::new("Weight").rules("positiveNumberField"));
    let doc = json!({"Weight": 2.5});

    let err = validate(&schema.bind(&doc), true).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: ValueKind::Int,
            actual: ValueKind::Float,
            ..
        }
    ));
}

// ============================================================================
// NAMING AND REGISTRIES
// ============================================================================

#[test]
fn test_alias_lookup_and_reporting() {
    let schema = product_schema();
    let doc = json!({
        "productId": 7,
        "productName": "Blue Chair",
        "quantity": -2,
        "isActive": true,
        "slug": "blue-chair"
    });
    let record = schema.bind(&doc);

    let declared = validate(&record, true).unwrap();
    assert_eq!(declared.violations[0].field, "Quantity");

    let aliased = Validator::new(&record, true)
        .with_naming(FieldNaming::Alias)
        .validate()
        .unwrap();
    assert_eq!(aliased.violations[0].field, "quantity");
}

#[test]
fn test_custom_rule_alongside_builtins() {
    let mut registry = RuleRegistry::with_builtins();
    registry
        .register_fn("evenNumber", |n: &i64| {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err("value must be even".to_string())
            }
        })
        .unwrap();

    let schema = RecordSchema::new("Batch")
        .with_field(FieldDecl::new("Size").rules("positiveNumberField, evenNumber"));
    let doc = json!({"Size": 3});
    let record = schema.bind(&doc);

    let err = Validator::new(&record, false)
        .with_registry(&registry)
        .validate()
        .unwrap_err();
    assert_eq!(err.rule(), Some("evenNumber"));

    assert!(matches!(
        registry.register_fn("evenNumber", |_: &i64| Ok(())),
        Err(Error::DuplicateRule { .. })
    ));
}

#[test]
fn test_schema_with_duplicate_field_is_rejected() {
    let result = RecordSchema::from_json_str(
        r#"{"name": "Dup", "fields": [{"name": "A"}, {"name": "A"}]}"#,
    );
    assert!(matches!(result, Err(Error::DuplicateField { name }) if name == "A"));
}

#[test]
fn test_schema_from_yaml() {
    let schema: RecordSchema = serde_yaml::from_str(
        "name: Order\n\
         fields:\n\
         \x20 - name: Quantity\n\
         \x20   validate: positiveNumberField\n\
         \x20 - name: Buyer\n\
         \x20   alias: buyer\n\
         \x20   validate: [\"required\", \"nameField\"]\n",
    )
    .unwrap();
    schema.check().unwrap();

    let doc = json!({"Quantity": 2, "buyer": "Ada"});
    let report = validate(&schema.bind(&doc), true).unwrap();
    assert_eq!(report.rules_evaluated, 3);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule, "nameField");
}

#[test]
fn test_report_serializes() {
    let product = Product { slug: "Bad".to_string(), ..valid_product() };
    let report = validate(&product, true).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["mode"], "silent");
    assert_eq!(value["record_kind"], "struct");
    assert_eq!(value["violations"][0]["rule"], "slugField");
    assert_eq!(
        value["violations"][0]["message"],
        "slug field must contain only lowercase letters"
    );
}
