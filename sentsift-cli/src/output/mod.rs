//! Output formatting module

use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the sentences of a new source document
    fn begin_document(&mut self, source: &str) -> Result<()>;

    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &str) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with their source
    Json,
    /// Markdown list per source document
    Markdown,
}

/// Boxed writer accepted by every formatter
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(format: OutputFormat, writer: BoxedWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
