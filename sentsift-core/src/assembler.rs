//! Paragraph assembly from the extracted line stream
//!
//! The assembler walks the lines once, rejoining hyphen-wrapped words,
//! dropping numbered headings and captions, and emitting a paragraph each
//! time a blank line (or the end of input) is reached.

use crate::line::{join_hyphenated, split_lines, Joined, LineKind};

/// Check whether a line looks like a numbered heading or figure caption
///
/// The line must start with a decimal digit and end with a letter, and the
/// line after it must be blank, missing, digit-initial or upper-case-initial.
/// Superscripts and vulgar fractions such as `²` or `½` are not digits here.
pub fn is_numeric_heading(line: &str, next_line: Option<&str>) -> bool {
    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
    let ends_with_letter = line.chars().next_back().is_some_and(char::is_alphabetic);
    if !starts_with_digit || !ends_with_letter {
        return false;
    }

    match next_line.and_then(|next| next.chars().next()) {
        None => true,
        Some(first) => first.is_ascii_digit() || first.is_uppercase(),
    }
}

/// Iterator producing paragraphs from raw extracted text
///
/// Yielded paragraphs are trimmed and never blank. Lines inside a paragraph
/// are joined with single spaces.
pub struct ParagraphAssembler<'a> {
    lines: Vec<&'a str>,
    position: usize,
    buffer: String,
    finished: bool,
    suppressed_headings: usize,
}

impl<'a> ParagraphAssembler<'a> {
    /// Create an assembler over the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
            position: 0,
            buffer: String::new(),
            finished: false,
            suppressed_headings: 0,
        }
    }

    /// Number of heading or caption lines dropped so far
    pub fn suppressed_headings(&self) -> usize {
        self.suppressed_headings
    }

    fn take_buffer(&mut self) -> Option<String> {
        let paragraph = self.buffer.trim().to_string();
        self.buffer.clear();
        if paragraph.is_empty() {
            None
        } else {
            Some(paragraph)
        }
    }

    fn append_line(&mut self, line: &str, next_line: Option<&str>) {
        if line.is_empty() {
            return;
        }
        if is_numeric_heading(line, next_line) {
            log::trace!("dropping numbered heading: {line}");
            self.suppressed_headings += 1;
            return;
        }
        self.buffer.push_str(line);
        self.buffer.push(' ');
    }
}

impl Iterator for ParagraphAssembler<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.position < self.lines.len() {
            let index = self.position;

            let (flushed, joined) = match LineKind::classify(self.lines[index]) {
                LineKind::ParagraphBoundary => {
                    (self.take_buffer(), Joined::single(&self.lines, index))
                }
                LineKind::ContinuesViaHyphen => (None, join_hyphenated(&self.lines, index)),
                LineKind::Plain => (None, Joined::single(&self.lines, index)),
            };

            let next_line = self.lines.get(joined.last_index + 1).copied().map(str::trim);
            self.append_line(&joined.text, next_line);
            self.position = joined.last_index + 1;

            if flushed.is_some() {
                return flushed;
            }
        }

        if self.finished {
            return None;
        }
        self.finished = true;
        self.take_buffer()
    }
}

/// Collect every paragraph of a text
pub fn assemble_paragraphs(text: &str) -> Vec<String> {
    ParagraphAssembler::new(text).collect()
}
