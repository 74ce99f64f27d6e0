//! Rule trait, closure adapter and type erasure
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

use std::fmt;
use std::marker::PhantomData;

use crate::value::{FieldValue, FromFieldValue, ValueKind};

/// Outcome of a single typed check; the error carries the violation message
pub type RuleResult = std::result::Result<(), String>;

/// A named validation check over one field value
pub trait Rule: Send + Sync + 'static {
    /// Typed input this rule accepts
    type Input: FromFieldValue;

    /// Check a value, returning a human-readable message on violation
    fn check(&self, value: &Self::Input) -> RuleResult;

    /// Short description shown in rule listings
    fn description(&self) -> &str {
        ""
    }
}

/// Result of evaluating an erased rule against a `FieldValue`
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Passed,
    Violated(String),
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Object-safe view of a `Rule`, stored in the registry
pub(crate) trait ErasedRule: Send + Sync {
    fn accepts(&self) -> Option<ValueKind>;
    fn description(&self) -> &str;
    fn evaluate(&self, value: &FieldValue) -> RuleOutcome;
}

impl<R: Rule> ErasedRule for R {
    fn accepts(&self) -> Option<ValueKind> {
        R::Input::expected_kind()
    }

    fn description(&self) -> &str {
        Rule::description(self)
    }

    fn evaluate(&self, value: &FieldValue) -> RuleOutcome {
        // Absence belongs to `required`; typed rules only judge present values
        if value.is_null() && R::Input::expected_kind().is_some() {
            return RuleOutcome::Passed;
        }

        let Some(input) = R::Input::from_field_value(value) else {
            return RuleOutcome::TypeMismatch {
                // `None` accepts every kind, so conversion cannot fail there
                expected: R::Input::expected_kind().unwrap_or(ValueKind::Null),
                actual: value.kind(),
            };
        };

        match self.check(&input) {
            Ok(()) => RuleOutcome::Passed,
            Err(message) => RuleOutcome::Violated(message),
        }
    }
}

/// A `Rule` backed by a typed closure
pub struct FnRule<T, F> {
    check: F,
    description: String,
    _input: PhantomData<fn(&T)>,
}

impl<T, F> FnRule<T, F> {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<T, F> fmt::Debug for FnRule<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T, F> Rule for FnRule<T, F>
where
    T: FromFieldValue + 'static,
    F: Fn(&T) -> RuleResult + Send + Sync + 'static,
{
    type Input = T;

    fn check(&self, value: &T) -> RuleResult {
        (self.check)(value)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Adapt a typed closure into a `Rule`
///
/// ```
/// use fieldguard_core::rules::{rule_fn, Rule};
///
/// let even = rule_fn(|n: &i64| if n % 2 == 0 { Ok(()) } else { Err("must be even".to_string()) });
/// assert!(even.check(&4).is_ok());
/// assert!(even.check(&3).is_err());
/// ```
pub fn rule_fn<T, F>(check: F) -> FnRule<T, F>
where
    T: FromFieldValue + 'static,
    F: Fn(&T) -> RuleResult + Send + Sync + 'static,
{
    FnRule {
        check,
        description: String::new(),
        _input: PhantomData,
    }
}
