//! Rule dispatch and the record validator
//!
//! The validator extracts a record's field rule map, then dispatches every
//! rule name to the registry in declaration order. Strict mode stops at the
//! first violation; silent mode logs and records every violation.
//! Configuration errors stop the run in both modes.
//!
//! The validator is organized into focused modules:
//! - `types`: modes, configuration, violations and reports
//! - `dispatch`: per-field rule resolution and evaluation
//! - `core`: the `Validator` entry point
//! - `tests`: end-to-end behavior of both modes
//!
//! Copyright (c) 2025 Fieldguard Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod dispatch;
pub mod core;

pub use types::{ValidationError, ValidationMode, ValidationReport, ValidatorConfig};
pub use dispatch::Dispatcher;
pub use self::core::{validate, Validator};
