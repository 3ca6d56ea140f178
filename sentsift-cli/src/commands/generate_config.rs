//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Default configuration, with every setting documented
pub const TEMPLATE: &str = r#"# sentsift configuration
#
# Every setting is optional; removed keys fall back to the values shown.

# Sentence acceptance thresholds
[filter]
# Minimum number of whitespace-separated words in a sentence
min_words = 10

# Longest accepted word, in characters (URLs with http:// are exempt)
max_word_chars = 18

# Maximum share of words starting with an upper-case letter
max_capitalized_ratio = 0.4

# Maximum share of distinct tokens missing from the dictionary
max_unknown_ratio = 0.4

# Words that are not purely alphabetic may number at most ln(words) / divisor
special_word_log_divisor = 2.0

# Collect the sentence-length histogram for --diagnostics
record_lengths = true

# Where generated text files go
[output]
root = "corpus"
manifest = "manifest"
extension = "txt"

# Word list for the unknown-word check, one word per line
[dictionary]
# path = "words.txt"

[performance]
# Worker threads for --parallel (0 = one per CPU)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and point [dictionary] at a word list");
        println!("2. Validate your configuration:");
        println!("   sentsift validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   sentsift dir path/to/pdfs --config {}",
            self.output.display()
        );

        Ok(())
    }
}
