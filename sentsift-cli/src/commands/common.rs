//! Arguments and setup shared by the processing commands

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use sentsift_core::{AcceptAll, Diagnostics, Pipeline, WordList};
use std::fs;
use std::path::PathBuf;

/// Flags accepted by every processing command
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SENTSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Word list for the unknown-word check (overrides the config file)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Write corrupt-character and sentence-length statistics as JSON
    #[arg(long, value_name = "FILE")]
    pub diagnostics: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Built-in defaults, overlaid by the config file, overlaid by flags
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("loading configuration from {}", path.display());
                CliConfig::from_file(path)?
            }
            None => CliConfig::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary.path = Some(dictionary.clone());
        }
        Ok(config)
    }

    /// Write the diagnostics report if `--diagnostics` was given
    pub fn write_diagnostics(&self, diagnostics: &Diagnostics) -> Result<()> {
        diagnostics.log_summary();

        let Some(path) = &self.diagnostics else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&diagnostics.report())?;
        fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write diagnostics: {}", path.display()))?;
        log::info!("wrote diagnostics to {}", path.display());
        Ok(())
    }
}

/// Build the extraction pipeline described by `config`
pub fn build_pipeline(config: &CliConfig) -> Result<Pipeline> {
    let builder = Pipeline::builder().config(config.filter.clone());
    let builder = match &config.dictionary.path {
        Some(path) => {
            let words = WordList::from_file(path)
                .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
            if words.is_empty() {
                log::warn!("dictionary {} contains no words", path.display());
            }
            builder.dictionary(words)
        }
        None => {
            log::warn!("no dictionary configured, the unknown-word check accepts every word");
            builder.dictionary(AcceptAll)
        }
    };
    Ok(builder.build()?)
}
