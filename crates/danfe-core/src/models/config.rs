//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DanfeError, Result};

/// Main configuration for the danfe pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanfeConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output rendering configuration.
    pub output: OutputConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run post-parse validation and attach its issues as warnings.
    pub validate: bool,

    /// Flag expiry strings that are not real calendar dates.
    pub check_expiry_dates: bool,

    /// Flag products whose name came out empty.
    pub warn_on_empty_name: bool,

    /// Flag documents where the NF-e marker appears with different numbers.
    pub warn_on_conflicting_numbers: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate: true,
            check_expiry_dates: true,
            warn_on_empty_name: true,
            warn_on_conflicting_numbers: true,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Include line and document totals in text output.
    pub include_totals: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_totals: true,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// File extensions picked up when expanding a glob pattern.
    pub extensions: Vec<String>,

    /// Keep going when a file fails to parse.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
            continue_on_error: false,
        }
    }
}

impl BatchConfig {
    /// Whether a path has one of the configured extensions (case-insensitive).
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        self.extensions.iter().any(|e| e.to_lowercase() == ext)
    }
}

impl DanfeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| DanfeError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| DanfeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
