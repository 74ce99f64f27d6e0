//! Accessor-based schemas for Rust structs
//!
//! A `Schema<T>` is an explicit list of `(FieldDecl, accessor)` pairs. Types
//! that implement `Schematic` become `Record`s automatically.
//!
//! ```
//! use fieldguard_core::{FieldDecl, Schema, Schematic, Validator};
//!
//! struct Account {
//!     handle: String,
//!     age: i32,
//! }
//!
//! impl Schematic for Account {
//!     fn schema() -> Schema<Self> {
//!         Schema::new("Account")
//!             .field(FieldDecl::new("Handle").rules("slugField"), |a: &Account| a.handle.as_str().into())
//!             .field(FieldDecl::new("Age").rules("positiveNumberField"), |a: &Account| a.age.into())
//!     }
//! }
//!
//! let account = Account { handle: "ops-team".into(), age: 4 };
//! let report = Validator::new(&account, false).validate().unwrap();
//! assert!(report.is_valid());
//! ```

use std::fmt;

use super::types::{BoundField, FieldDecl, Record};
use crate::value::{FieldValue, ValueKind};

type Accessor<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

struct FieldSpec<T> {
    decl: FieldDecl,
    accessor: Accessor<T>,
}

/// Declaration-ordered field list for the record type `T`
pub struct Schema<T> {
    name: String,
    fields: Vec<FieldSpec<T>>,
}

impl<T> Schema<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field and the closure that reads its current value
    pub fn field<F>(mut self, decl: FieldDecl, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.fields.push(FieldSpec {
            decl,
            accessor: Box::new(accessor),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field declarations without values
    pub fn decls(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter().map(|spec| &spec.decl)
    }

    /// Read every field of `value`
    pub fn bind(&self, value: &T) -> Vec<BoundField> {
        self.fields
            .iter()
            .map(|spec| BoundField {
                decl: spec.decl.clone(),
                value: (spec.accessor)(value),
            })
            .collect()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.decls().collect::<Vec<_>>())
            .finish()
    }
}

/// Types that describe their own fields
pub trait Schematic: Sized {
    fn schema() -> Schema<Self>;
}

impl<T: Schematic> Record for T {
    fn kind(&self) -> ValueKind {
        ValueKind::Struct
    }

    fn fields(&self) -> Vec<BoundField> {
        T::schema().bind(self)
    }
}
