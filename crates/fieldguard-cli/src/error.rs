//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from fieldguard-core
    #[error(transparent)]
    Core(#[from] fieldguard_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        use fieldguard_core::Error as CoreError;

        match self {
            Self::Io(_) => 1,
            Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::UnknownRule { .. }) => 3,
            Self::Core(CoreError::TypeMismatch { .. }) => 4,
            Self::Core(CoreError::NonStruct { .. }) => 5,
            Self::Core(_) => 6,
            Self::FileNotFound { .. } => 7,
            Self::InvalidFormat { .. } => 8,
            Self::Config(_) => 9,
            Self::Json(_) => 10,
            Self::Yaml(_) => 11,
            Self::Toml(_) => 12,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::InvalidFormat { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    use colored::Colorize;

    let label = match error {
        Error::Core(core) if !core.is_configuration_error() => "Validation failed:",
        _ => "Error:",
    };

    if use_color {
        format!("{} {}", label.red().bold(), error)
    } else {
        format!("{} {}", label, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguard_core::{ValidationError, ValueKind};

    #[test]
    fn test_exit_codes_per_core_error_class() {
        let violation: Error = fieldguard_core::Error::from(ValidationError::new(
            "Quantity",
            "positiveNumberField",
            "positive number field must be zero or greater",
            false,
        ))
        .into();
        assert_eq!(violation.exit_code(), 2);

        let unknown: Error = fieldguard_core::Error::UnknownRule {
            field: "Name".to_string(),
            rule: "bogusRule".to_string(),
        }
        .into();
        assert_eq!(unknown.exit_code(), 3);

        let non_struct: Error = fieldguard_core::Error::NonStruct { kind: ValueKind::Int }.into();
        assert_eq!(non_struct.exit_code(), 5);

        assert_eq!(Error::config("bad").exit_code(), 9);
    }

    #[test]
    fn test_format_error_labels() {
        let violation: Error = fieldguard_core::Error::from(ValidationError::new(
            "Slug", "slugField", "slug field must contain only lowercase letters", false,
        ))
        .into();
        assert_eq!(
            format_error(&violation, false),
            "Validation failed: Field 'Slug' failed rule 'slugField': slug field must contain only lowercase letters"
        );

        let io = Error::other("disk full");
        assert_eq!(format_error(&io, false), "Error: disk full");
    }
}
