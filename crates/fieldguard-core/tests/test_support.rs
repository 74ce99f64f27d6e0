//! Shared test support utilities for integration tests

#![allow(dead_code)]

use fieldguard_core::{FieldDecl, RecordSchema, Schema, Schematic, ValidationReport, Validator};
use serde_json::json;

/// The canonical product record
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub is_active: bool,
    pub slug: String,
}

impl Schematic for Product {
    fn schema() -> Schema<Self> {
        Schema::new("Product")
            .field(
                FieldDecl::new("ProductID")
                    .alias("productId")
                    .rules("required,positiveNumberField"),
                |p: &Product| p.product_id.into(),
            )
            .field(
                FieldDecl::new("ProductName").alias("productName").rules("nameField"),
                |p: &Product| p.product_name.as_str().into(),
            )
            .field(
                FieldDecl::new("Quantity").alias("quantity").rules("positiveNumberField"),
                |p: &Product| p.quantity.into(),
            )
            .field(
                FieldDecl::new("IsActive").alias("isActive").rules("alwaysTrueField"),
                |p: &Product| p.is_active.into(),
            )
            .field(
                FieldDecl::new("Slug").alias("slug").rules("slugField"),
                |p: &Product| p.slug.as_str().into(),
            )
    }
}

/// Create a product that passes every rule
pub fn valid_product() -> Product {
    Product {
        product_id: 1,
        product_name: "Test Product".to_string(),
        quantity: 5,
        is_active: true,
        slug: "test-slug".to_string(),
    }
}

/// Create a product that violates every rule except `required`
pub fn invalid_product() -> Product {
    Product {
        product_id: -1,
        product_name: "Widget".to_string(),
        quantity: -10,
        is_active: false,
        slug: "Widget-Slug".to_string(),
    }
}

/// The product schema in its declarative JSON form
pub fn product_schema() -> RecordSchema {
    RecordSchema::from_value(json!({
        "name": "Product",
        "fields": [
            {"name": "ProductID", "alias": "productId", "validate": "required,positiveNumberField"},
            {"name": "ProductName", "alias": "productName", "validate": "nameField"},
            {"name": "Quantity", "alias": "quantity", "validate": "positiveNumberField"},
            {"name": "IsActive", "alias": "isActive", "validate": "alwaysTrueField"},
            {"name": "Slug", "alias": "slug", "validate": "slugField"}
        ]
    }))
    .expect("product schema is valid")
}

/// A product document matching `valid_product`
pub fn valid_product_json() -> serde_json::Value {
    json!({
        "ProductID": 1,
        "ProductName": "Test Product",
        "Quantity": 5,
        "IsActive": true,
        "Slug": "test-slug"
    })
}

/// Assert that silent validation of `product` succeeds and return its report
pub fn assert_silent_succeeds(product: &Product) -> ValidationReport {
    match Validator::new(product, true).validate() {
        Ok(report) => report,
        Err(e) => panic!("Silent validation failed: {}", e),
    }
}
