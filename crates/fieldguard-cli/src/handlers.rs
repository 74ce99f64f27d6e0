//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod rules;
mod utils;
mod validate;

pub use completions::handle_completions;
pub use rules::handle_rules;
pub use validate::handle_validate;
