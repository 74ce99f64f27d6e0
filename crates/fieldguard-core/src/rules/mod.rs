//! Validation rules and the rule registry
//!
//! Rules are typed: each declares the input it accepts through
//! `FromFieldValue`, and the registry erases that type once at registration.
//! A value of the wrong kind reaching a rule is reported as a type mismatch
//! instead of being coerced.
//!
//! - `types`: the `Rule` trait, closure adapters and type erasure
//! - `builtin`: the five built-in rules
//! - `registry`: name -> rule mapping, shared built-in singleton
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod builtin;
pub mod registry;

pub use types::{rule_fn, FnRule, Rule, RuleOutcome, RuleResult};
pub use builtin::{AlwaysTrue, NameField, PositiveNumber, Required, Slug};
pub use registry::{RegisteredRule, RuleInfo, RuleRegistry};
