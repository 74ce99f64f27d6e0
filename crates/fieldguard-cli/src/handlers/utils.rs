//! Shared utilities for command handlers

use crate::config::DocumentFormat;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and parse a JSON, YAML or TOML document
///
/// The format follows the file extension; unknown extensions are read as JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");

    let format = DocumentFormat::from_path(path);
    format.parse(&content).map_err(|e| {
        debug!(error = %e, "Failed to parse document");
        Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format.name().to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_yaml_document() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "Quantity: 5\nSlug: test-slug").unwrap();

        let value: serde_json::Value = load_document(file.path()).unwrap();
        assert_eq!(value["Quantity"], 5);
        assert_eq!(value["Slug"], "test-slug");
    }

    #[test]
    fn test_malformed_document() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"Quantity\": ").unwrap();

        let result: Result<serde_json::Value> = load_document(file.path());
        assert!(matches!(result, Err(Error::InvalidFormat { expected, .. }) if expected == "JSON"));
    }

    #[test]
    fn test_missing_document() {
        let result: Result<serde_json::Value> = load_document(Path::new("/nonexistent/record.json"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
