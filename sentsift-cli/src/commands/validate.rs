//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(anyhow::anyhow!("Validation failed: {e:#}"));
            }
        };

        println!("✓ Configuration is valid!");
        let filter = &config.filter;
        println!("  min_words:                {}", filter.min_words);
        println!("  max_word_chars:           {}", filter.max_word_chars);
        println!("  max_capitalized_ratio:    {}", filter.max_capitalized_ratio);
        println!("  max_unknown_ratio:        {}", filter.max_unknown_ratio);
        println!("  special_word_log_divisor: {}", filter.special_word_log_divisor);
        println!("  output root:              {}", config.output.root.display());
        println!(
            "  worker threads:           {}",
            config.performance.resolved_threads()
        );

        match &config.dictionary.path {
            Some(path) if path.is_file() => println!("  dictionary:               {}", path.display()),
            Some(path) => {
                println!("  dictionary:               {} (not found)", path.display());
                log::warn!("dictionary {} does not exist", path.display());
            }
            None => println!("  dictionary:               none (every word is known)"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("sentsift.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("sentsift.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[filter]\nmin_words = 8\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[filter]\nmin_words = 0\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }
}
