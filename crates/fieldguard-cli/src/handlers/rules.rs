//! Rule listing command handler

use crate::error::Result;
use crate::output::OutputWriter;
use fieldguard_core::RuleRegistry;
use tracing::instrument;

/// Handle the rules command
#[instrument(skip(output))]
pub fn handle_rules(output: &mut OutputWriter) -> Result<()> {
    let entries = RuleRegistry::builtin().entries();
    output.info(&format!("{} registered rule(s)", entries.len()))?;
    output.rules(&entries)
}
