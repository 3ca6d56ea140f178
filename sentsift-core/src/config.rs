//! Sentence acceptance thresholds
//!
//! Every numeric limit used by the sentence validator lives here so that
//! each one can be tuned and tested at its boundary independently.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default minimum number of whitespace-delimited words
pub const DEFAULT_MIN_WORDS: usize = 10;
/// Default maximum characters in one word (URLs excepted)
pub const DEFAULT_MAX_WORD_CHARS: usize = 18;
/// Default maximum share of capitalized words
pub const DEFAULT_MAX_CAPITALIZED_RATIO: f64 = 0.4;
/// Default maximum share of distinct words missing from the dictionary
pub const DEFAULT_MAX_UNKNOWN_RATIO: f64 = 0.4;
/// Default divisor of `ln(words)` bounding the number of special words
pub const DEFAULT_SPECIAL_WORD_LOG_DIVISOR: f64 = 2.0;

/// Thresholds applied to candidate sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Sentences with fewer words are rejected
    pub min_words: usize,
    /// Sentences containing a longer word are rejected
    pub max_word_chars: usize,
    /// Rejected when capitalized words exceed this share of all words
    pub max_capitalized_ratio: f64,
    /// Rejected when unknown words exceed this share of distinct words
    pub max_unknown_ratio: f64,
    /// Special words may not exceed `ln(words) / special_word_log_divisor`
    pub special_word_log_divisor: f64,
    /// Populate the sentence-length histogram
    pub record_lengths: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_word_chars: DEFAULT_MAX_WORD_CHARS,
            max_capitalized_ratio: DEFAULT_MAX_CAPITALIZED_RATIO,
            max_unknown_ratio: DEFAULT_MAX_UNKNOWN_RATIO,
            special_word_log_divisor: DEFAULT_SPECIAL_WORD_LOG_DIVISOR,
            record_lengths: true,
        }
    }
}

impl FilterConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FilterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every threshold is in range
    pub fn validate(&self) -> Result<()> {
        if self.min_words == 0 {
            return Err(CoreError::InvalidConfig(
                "min_words must be at least 1".to_string(),
            ));
        }
        if self.max_word_chars == 0 {
            return Err(CoreError::InvalidConfig(
                "max_word_chars must be at least 1".to_string(),
            ));
        }
        for (name, ratio) in [
            ("max_capitalized_ratio", self.max_capitalized_ratio),
            ("max_unknown_ratio", self.max_unknown_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be between 0 and 1, got {ratio}"
                )));
            }
        }
        let divisor = self.special_word_log_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "special_word_log_divisor must be positive, got {}",
                self.special_word_log_divisor
            )));
        }
        Ok(())
    }

    /// Maximum number of special words allowed in a sentence of `words` words
    pub fn special_word_limit(&self, words: usize) -> f64 {
        (words as f64).ln() / self.special_word_log_divisor
    }
}

/// Builder for [`FilterConfig`]
#[derive(Debug, Clone, Default)]
pub struct FilterConfigBuilder {
    config: FilterConfig,
}

impl FilterConfigBuilder {
    /// Set the minimum word count
    pub fn min_words(mut self, min_words: usize) -> Self {
        self.config.min_words = min_words;
        self
    }

    /// Set the maximum word length in characters
    pub fn max_word_chars(mut self, max_word_chars: usize) -> Self {
        self.config.max_word_chars = max_word_chars;
        self
    }

    /// Set the maximum capitalized-word ratio
    pub fn max_capitalized_ratio(mut self, ratio: f64) -> Self {
        self.config.max_capitalized_ratio = ratio;
        self
    }

    /// Set the maximum unknown-word ratio
    pub fn max_unknown_ratio(mut self, ratio: f64) -> Self {
        self.config.max_unknown_ratio = ratio;
        self
    }

    /// Set the divisor of the special-word bound
    pub fn special_word_log_divisor(mut self, divisor: f64) -> Self {
        self.config.special_word_log_divisor = divisor;
        self
    }

    /// Enable or disable the sentence-length histogram
    pub fn record_lengths(mut self, enabled: bool) -> Self {
        self.config.record_lengths = enabled;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<FilterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
