//! Runtime field values
//!
//! Rules never see a record directly; they see one `FieldValue` at a time.
//! `FromFieldValue` turns a `FieldValue` into the typed input a rule expects,
//! returning `None` on a kind mismatch instead of coercing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The underlying kind of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    /// A structured aggregate with named fields
    Struct,
}

impl ValueKind {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Struct => "struct",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent value; the sentinel checked by `required`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<FieldValue>),
    /// Nested aggregate. Entries are carried but never validated recursively.
    Record(Vec<(String, FieldValue)>),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Null => ValueKind::Null,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Int(_) => ValueKind::Int,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Str(_) => ValueKind::String,
            FieldValue::List(_) => ValueKind::List,
            FieldValue::Record(_) => ValueKind::Struct,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Str(s) => write!(f, "{:?}", s),
            FieldValue::List(items) => write!(f, "[{} items]", items.len()),
            FieldValue::Record(entries) => write!(f, "{{{} fields}}", entries.len()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Str(value.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// JSON numbers that fit `i64` become `Int`; everything else, including
/// integers above `i64::MAX`, becomes `Float`
impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::Str(s.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Object(map) => FieldValue::Record(
                map.iter()
                    .map(|(key, value)| (key.clone(), FieldValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::from(&value)
    }
}

/// Typed extraction of a rule input from a `FieldValue`
pub trait FromFieldValue: Sized {
    /// Kind this input accepts; `None` accepts every kind
    fn expected_kind() -> Option<ValueKind>;

    /// Extract the typed input, or `None` when the kind does not match
    fn from_field_value(value: &FieldValue) -> Option<Self>;
}

impl FromFieldValue for FieldValue {
    fn expected_kind() -> Option<ValueKind> {
        None
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// Integer rules see the signed 64-bit range only. A JSON integer above
/// `i64::MAX` arrives as `Float` and is reported as a type mismatch.
impl FromFieldValue for i64 {
    fn expected_kind() -> Option<ValueKind> {
        Some(ValueKind::Int)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        value.as_i64()
    }
}

impl FromFieldValue for f64 {
    fn expected_kind() -> Option<ValueKind> {
        Some(ValueKind::Float)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl FromFieldValue for bool {
    fn expected_kind() -> Option<ValueKind> {
        Some(ValueKind::Bool)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromFieldValue for String {
    fn expected_kind() -> Option<ValueKind> {
        Some(ValueKind::String)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromFieldValue for Vec<FieldValue> {
    fn expected_kind() -> Option<ValueKind> {
        Some(ValueKind::List)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::List(items) => Some(items.clone()),
            _ => None,
        }
    }
}
