//! Validation command handler and related utilities

use super::utils::load_document;
use crate::cli::ValidateArgs;
use crate::config::{Config, ValidationSettings};
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use fieldguard_core::{
    extract_field_rules, DynamicRecord, RecordSchema, ValidationMode, ValidationReport,
    Validator, ValidatorConfig,
};
use tracing::{debug, info, instrument};

/// Handle the validate command
#[instrument(skip(config, output), fields(record = %args.record.display(), schema = %args.schema.display()))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("record: {}", args.record.display()));
    output.info(&format!(
        "Validating {} against {}",
        args.record.display(),
        args.schema.display()
    ))?;

    let schema: RecordSchema = load_document(&args.schema)?;
    schema.check()?;
    debug!(schema = %schema.name, fields = schema.fields.len(), "Loaded record schema");

    let document: serde_json::Value = load_document(&args.record)?;
    let record = schema.bind(&document);

    let validator_config = resolve_validator_config(&args, &config.validation);
    info!(mode = %validator_config.mode, naming = ?validator_config.naming, "Starting validation");

    if args.detailed {
        output.section("Record")?;
        output.record(&document)?;
    }

    let report = {
        let _validation_timer = Timer::new("record_validation");
        Validator::with_config(&record, validator_config).validate()?
    };

    if args.detailed {
        show_field_breakdown(output, &record, &validator_config, &report)?;
    }

    if report.mode == ValidationMode::Silent && !report.is_valid() {
        output.warning(&format!(
            "{} violation(s) logged; validation continued in silent mode",
            report.violations.len()
        ))?;
    }
    output.report(&report)
}

/// Combine configuration file defaults with command-line overrides
fn resolve_validator_config(args: &ValidateArgs, settings: &ValidationSettings) -> ValidatorConfig {
    let mut config = settings.to_validator_config();

    if let Some(fail_silently) = args.fail_silently() {
        config.mode = ValidationMode::from_fail_silently(fail_silently);
    }
    if let Some(naming) = args.naming {
        config.naming = naming.into();
    }
    if let Some(max_violations) = args.max_violations {
        config.max_violations = max_violations;
    }

    config
}

/// Per-field rules and recorded violation counts
fn show_field_breakdown(
    output: &mut OutputWriter,
    record: &DynamicRecord<'_>,
    config: &ValidatorConfig,
    report: &ValidationReport,
) -> Result<()> {
    let rules = extract_field_rules(record, config.naming)?;
    let rows = rules
        .iter()
        .map(|entry| {
            vec![
                entry.name.clone(),
                entry.rule_names().collect::<Vec<_>>().join(", "),
                report.violations_for(&entry.name).count().to_string(),
            ]
        })
        .collect();

    output.section("Fields")?;
    output.table(&["Field", "Rules", "Violations"], rows)
}
