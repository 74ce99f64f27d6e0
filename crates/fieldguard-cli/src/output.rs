//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with specialized
//! support for validation reports and rule listings.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use fieldguard_core::{RuleInfo, ValidationReport};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report with its violations
    fn format_report(&self, report: &ValidationReport) -> Result<String>;

    /// Format the registered rule listing
    fn format_rules(&self, rules: &[RuleInfo]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_rules_human(rules)),
            _ => self.format(&rules),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.is_human() {
            self.writeln(&formatted)
        } else {
            self.write(&formatted)
        }
    }

    /// Write a record with sensitive values masked
    pub fn record(&mut self, value: &serde_json::Value) -> Result<()> {
        let mut redacted = value.clone();
        redaction::redact_json_value(&mut redacted);
        self.data(&redacted)
    }

    /// Write a validation report with specialized formatting
    pub fn report(&mut self, report: &ValidationReport) -> Result<()> {
        let formatted = self.format.format_report(report)?;
        self.writeln(formatted.trim_end())
    }

    /// Write the rule listing with specialized formatting
    pub fn rules(&mut self, rules: &[RuleInfo]) -> Result<()> {
        let formatted = self.format.format_rules(rules)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        let table = render_table(headers, &rows);
        let mut lines = table.lines();
        if let Some(header) = lines.next() {
            if self.use_color {
                self.writeln(&header.bold().to_string())?;
            } else {
                self.writeln(header)?;
            }
        }
        for line in lines {
            self.writeln(line)?;
        }
        Ok(())
    }
}

/// Render rows as aligned columns
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&render_row(headers.to_vec()));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&render_row(row.iter().map(String::as_str).collect()));
        output.push('\n');
    }
    output
}

/// Format a validation report for human reading
fn format_report_human(report: &ValidationReport) -> String {
    let mut output = String::new();
    let totals = format!(
        "{} field(s), {} rule(s) checked in {} mode",
        report.fields_checked, report.rules_evaluated, report.mode
    );

    if report.is_valid() {
        output.push_str(&format!("✓ Record is valid ({})\n", totals));
        return output;
    }

    output.push_str(&format!(
        "⚠ {} violation(s) recorded ({})\n",
        report.violations.len(),
        totals
    ));
    for (i, violation) in report.violations.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} [{}]: {}\n",
            i + 1,
            violation.field,
            violation.rule,
            violation.message
        ));
    }
    if report.truncated {
        output.push_str("  … further violations were not recorded (max_violations reached)\n");
    }

    output
}

/// Format the rule listing for human reading
fn format_rules_human(rules: &[RuleInfo]) -> String {
    let rows = rules
        .iter()
        .map(|rule| {
            vec![
                rule.name.clone(),
                rule.accepts.clone(),
                rule.description.clone(),
            ]
        })
        .collect::<Vec<_>>();

    render_table(&["Rule", "Accepts", "Description"], &rows)
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
