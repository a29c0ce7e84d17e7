//! Configuration structures for the docbr engine and its outputs.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatch::DEFAULT_PARALLEL_THRESHOLD;
use crate::error::{DocbrError, Result};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocbrConfig {
    /// Batch engine configuration.
    pub engine: EngineConfig,

    /// Output rendering configuration.
    pub output: OutputConfig,
}

/// Batch engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Batches at least this long are processed in parallel.
    pub parallel_threshold: usize,

    /// Worker threads for the parallel path (0 = one per core).
    pub num_threads: usize,

    /// Drop a trailing `.0` left by float serialization.
    pub strip_float_suffix: bool,

    /// Require pattern matches to span the whole input.
    pub anchored_matching: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            num_threads: 0,
            strip_float_suffix: true,
            anchored_matching: false,
        }
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Text written in place of absent values (csv and text output).
    pub null_value: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            null_value: String::new(),
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}', expected json, csv or text", other)),
        }
    }
}

impl DocbrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DocbrError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| DocbrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DocbrConfig::default();
        assert_eq!(config.engine.parallel_threshold, 4096);
        assert_eq!(config.engine.num_threads, 0);
        assert!(config.engine.strip_float_suffix);
        assert!(!config.engine.anchored_matching);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.null_value, "");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DocbrConfig =
            serde_json::from_str(r#"{"engine": {"anchored_matching": true}, "output": {"format": "csv"}}"#).unwrap();
        assert!(config.engine.anchored_matching);
        assert_eq!(config.engine.parallel_threshold, 4096);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Text.extension(), "txt");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut config = DocbrConfig::default();
        config.engine.num_threads = 2;
        config.output.null_value = "NA".to_string();

        config.save(&path).unwrap();
        let loaded = DocbrConfig::from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = DocbrConfig::from_file(&path).unwrap_err();

        assert!(matches!(err, DocbrError::Config(_)));
    }
}
