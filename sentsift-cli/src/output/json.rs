//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    source: String,
    index: usize,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Document the sentence was extracted from
    pub source: String,
    /// Position of the sentence within its document
    pub index: usize,
    /// Number of whitespace-separated words
    pub words: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            source: String::new(),
            index: 0,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.source = source.to_string();
        self.index = 0;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str) -> Result<()> {
        self.sentences.push(SentenceData {
            text: sentence.to_string(),
            source: self.source.clone(),
            index: self.index,
            words: sentence.split_whitespace().count(),
        });
        self.index += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
