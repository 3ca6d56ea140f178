//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str) -> Result<()> {
        writeln!(self.writer, "{sentence}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sentence_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.begin_document("a.txt").unwrap();
        formatter.format_sentence("First sentence.").unwrap();
        formatter.begin_document("b.txt").unwrap();
        formatter.format_sentence("Second sentence.").unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(formatter.writer).unwrap(),
            "First sentence.\nSecond sentence.\n"
        );
    }
}
