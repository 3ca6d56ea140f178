//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use sentsift_core::FilterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Sentence acceptance thresholds
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Word list used for the unknown-word check
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Where generated text files go
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for generated text files
    pub root: PathBuf,

    /// Manifest file name, relative to `root`
    pub manifest: String,

    /// Extension of generated files
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("corpus"),
            manifest: "manifest".to_string(),
            extension: "txt".to_string(),
        }
    }
}

/// Dictionary configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Newline-separated word list
    pub path: Option<PathBuf>,
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker count with 0 resolved to the number of CPUs
    pub fn resolved_threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Check the thresholds and the output layout
    pub fn validate(&self) -> Result<()> {
        self.filter
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if self.output.extension.trim().is_empty() {
            return Err(CliError::ConfigError("output.extension must not be empty".into()).into());
        }
        if self.output.manifest.trim().is_empty() {
            return Err(CliError::ConfigError("output.manifest must not be empty".into()).into());
        }
        Ok(())
    }
}
