//! Line classification for PDF-extracted text
//!
//! Extraction loses paragraph structure, so the only signals left are blank
//! lines and line-wrap hyphens. This module turns a single line into one of
//! three kinds and provides the hyphen-rejoin step that the assembler runs
//! over the line stream.

use crate::charset::is_hyphen;

/// Classification of a single extracted line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Blank after trimming; ends the current paragraph
    ParagraphBoundary,
    /// Ends in a hyphen or dash and may continue on the next line
    ContinuesViaHyphen,
    /// Any other line
    Plain,
}

impl LineKind {
    /// Classify a line, trimming it first
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            LineKind::ParagraphBoundary
        } else if ends_with_hyphen(trimmed) {
            LineKind::ContinuesViaHyphen
        } else {
            LineKind::Plain
        }
    }
}

/// Check whether text ends in one of the line-wrap hyphen characters
#[inline]
pub fn ends_with_hyphen(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_hyphen)
}

/// Drop a single trailing hyphen, if present
pub fn strip_trailing_hyphen(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, ch)) if is_hyphen(ch) => &text[..idx],
        _ => text,
    }
}

/// Split raw extracted text into lines
///
/// Both `\n` and `\r` terminate a line, but a `\r\n` pair counts once so
/// that CRLF input does not produce a paragraph boundary after every line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().flat_map(|line| line.split('\r')).collect()
}

/// Result of rejoining a hyphen-wrapped line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    /// Trimmed line with wrapped continuations appended
    pub text: String,
    /// Index of the last input line consumed
    pub last_index: usize,
}

impl Joined {
    /// A single trimmed line with nothing appended
    pub fn single(lines: &[&str], index: usize) -> Self {
        Self {
            text: lines[index].trim().to_string(),
            last_index: index,
        }
    }
}

/// Rejoin a line that was broken by a line-wrap hyphen
///
/// Starting at `lines[index]`, while the accumulated text ends in a hyphen
/// and another line exists, the next line is consumed. A non-blank next line
/// replaces the trailing hyphen and is appended without a space. A blank next
/// line is consumed without joining, leaving the hyphen in place for the next
/// round. At end of input the text is returned as-is.
pub fn join_hyphenated(lines: &[&str], index: usize) -> Joined {
    let mut text = lines[index].trim().to_string();
    let mut cursor = index;

    while ends_with_hyphen(&text) {
        let Some(next) = lines.get(cursor + 1) else {
            log::trace!("hyphenated line {} has no continuation", cursor + 1);
            break;
        };
        let next = next.trim();
        if !next.is_empty() {
            log::trace!("joining line {} onto hyphenated line {}", cursor + 2, cursor + 1);
            let keep = strip_trailing_hyphen(&text).len();
            text.truncate(keep);
            text.push_str(next);
        }
        cursor += 1;
    }

    Joined {
        text,
        last_index: cursor,
    }
}
