// Validate the product record in both modes
// Usage: cargo run --example product [quantity]
// Example: cargo run --example product -- -1

use fieldguard_core::{FieldDecl, Schema, Schematic, Validator};
use std::env;
use tracing_subscriber::EnvFilter;

struct Product {
    product_id: i64,
    product_name: String,
    quantity: i64,
    is_active: bool,
    slug: String,
}

impl Schematic for Product {
    fn schema() -> Schema<Self> {
        Schema::new("Product")
            .field(
                FieldDecl::new("ProductID").rules("required,positiveNumberField"),
                |p: &Product| p.product_id.into(),
            )
            .field(FieldDecl::new("ProductName").rules("nameField"), |p: &Product| {
                p.product_name.as_str().into()
            })
            .field(FieldDecl::new("Quantity").rules("positiveNumberField"), |p: &Product| {
                p.quantity.into()
            })
            .field(FieldDecl::new("IsActive").rules("alwaysTrueField"), |p: &Product| {
                p.is_active.into()
            })
            .field(FieldDecl::new("Slug").rules("slugField"), |p: &Product| {
                p.slug.as_str().into()
            })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .compact()
        .init();

    // Quantity from the command line (default: 5)
    let quantity = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 5,
    };

    let product = Product {
        product_id: 1,
        product_name: "Test Product".to_string(),
        quantity,
        is_active: true,
        slug: "test-slug".to_string(),
    };

    match Validator::new(&product, false).validate() {
        Ok(_) => println!("strict: valid"),
        Err(e) => println!("strict: {}", e),
    }

    let report = Validator::new(&product, true).validate()?;
    println!(
        "silent: {} violation(s) across {} fields",
        report.violations.len(),
        report.fields_checked
    );

    Ok(())
}
