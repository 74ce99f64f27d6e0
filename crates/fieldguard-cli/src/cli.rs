//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Fieldguard CLI - Declarative, tag-driven field validation
///
/// Validates JSON or YAML records against a record schema whose fields
/// declare comma-separated rule names.
#[derive(Parser, Debug)]
#[command(
    name = "fieldguard",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FIELDGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a record against the rules declared in a record schema
    Validate(ValidateArgs),

    /// List the registered validation rules
    Rules,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the record file (JSON or YAML)
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Path to the record schema file (JSON, YAML or TOML)
    #[arg(short, long, value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Log and collect violations instead of stopping at the first one
    #[arg(long, conflicts_with = "strict")]
    pub silent: bool,

    /// Stop at the first violation (overrides the configuration file)
    #[arg(long)]
    pub strict: bool,

    /// Which field name to report in violations
    #[arg(long, value_enum)]
    pub naming: Option<Naming>,

    /// Stop recording after this many violations in silent mode (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_violations: Option<usize>,

    /// Show the record and per-field results
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Field naming in violation reports
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Naming {
    /// The field's declared name
    Declared,
    /// The field's serialization alias, when it has one
    Alias,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl ValidateArgs {
    /// Mode requested on the command line, if any
    pub fn fail_silently(&self) -> Option<bool> {
        if self.silent {
            Some(true)
        } else if self.strict {
            Some(false)
        } else {
            None
        }
    }
}

impl From<Naming> for fieldguard_core::FieldNaming {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Declared => fieldguard_core::FieldNaming::Declared,
            Naming::Alias => fieldguard_core::FieldNaming::Alias,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
