//! Paragraph-level rejection of damaged text and program code

use crate::charset::is_legal;
use crate::diagnostics::Diagnostics;
use std::fmt;

/// Prefixes that mark a paragraph as source code or markup
const CODE_PREFIXES: [&str; 6] = ["package", "import", "public", "private", "/**", "<"];

/// Fragments that mark a paragraph as source code wherever they occur
const CODE_FRAGMENTS: [&str; 3] = [");", "{", "}"];

/// Why a paragraph was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRejection {
    /// A character outside the legal ranges was found
    CorruptChar {
        /// The offending character
        ch: char,
        /// Its character (not byte) index in the paragraph
        index: usize,
    },
    /// The paragraph looks like program code or markup
    ProgramCode,
}

impl fmt::Display for ParagraphRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParagraphRejection::CorruptChar { ch, index } => write!(
                f,
                "illegal character {ch:?} (U+{:04X}) at index {index}",
                *ch as u32
            ),
            ParagraphRejection::ProgramCode => write!(f, "program code"),
        }
    }
}

/// Find the first illegal character, ignoring the leading character
///
/// The first character is exempt because drop caps and lead-in ornaments
/// are commonly extracted as stray symbols.
pub fn first_illegal_char(paragraph: &str) -> Option<(usize, char)> {
    paragraph
        .chars()
        .enumerate()
        .skip(1)
        .find(|&(_, ch)| !is_legal(ch))
}

/// Check whether a paragraph is program code or markup rather than prose
pub fn is_program_code(paragraph: &str) -> bool {
    CODE_PREFIXES.iter().any(|p| paragraph.starts_with(p))
        || CODE_FRAGMENTS.iter().any(|f| paragraph.contains(f))
}

/// Validate a paragraph, recording any illegal character in `diagnostics`
///
/// Character legality is checked first; the code test only runs on
/// paragraphs whose characters are all legal.
pub fn check(paragraph: &str, diagnostics: &mut Diagnostics) -> Result<(), ParagraphRejection> {
    if let Some((index, ch)) = first_illegal_char(paragraph) {
        diagnostics.record_corrupt_char(ch);
        return Err(ParagraphRejection::CorruptChar { ch, index });
    }
    if is_program_code(paragraph) {
        return Err(ParagraphRejection::ProgramCode);
    }
    Ok(())
}

/// Boolean form of [`check`]
pub fn is_valid(paragraph: &str, diagnostics: &mut Diagnostics) -> bool {
    match check(paragraph, diagnostics) {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("dropping paragraph ({reason}): {paragraph}");
            false
        }
    }
}
