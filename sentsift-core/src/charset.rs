//! Character tables shared by the pipeline stages
//!
//! All tables are frozen. The legal ranges decide whether a paragraph has
//! been damaged by extraction, the hyphen set drives line rejoining, and the
//! punctuation set is stripped from words before the alphabetic check.

use std::ops::RangeInclusive;

/// Code-point ranges accepted in prose
///
/// Printable ASCII, the general punctuation block from HYPHEN to
/// HYPHENATION POINT, and the Latin ligatures FF through ST.
pub const LEGAL_RANGES: [RangeInclusive<u32>; 3] = [32..=126, 8208..=8231, 64256..=64262];

/// Check whether a character may appear in a valid paragraph
#[inline]
pub fn is_legal(ch: char) -> bool {
    let cp = ch as u32;
    LEGAL_RANGES.iter().any(|range| range.contains(&cp))
}

/// Check whether a character is a line-wrap hyphen or dash
///
/// ASCII hyphen-minus plus U+2010..=U+2015 and U+2017.
#[inline]
pub fn is_hyphen(ch: char) -> bool {
    matches!(ch, '-' | '\u{2010}'..='\u{2015}' | '\u{2017}')
}

/// Characters removed from a token before it is tested for being alphabetic
pub const PUNCTUATION: [char; 25] = [
    ',', '\u{2019}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '-', '\u{2015}',
    ':', ';', '/', '+', '=', '%', '!', '\'', '"', '[', ']', '(', ')', '\u{201C}', '\u{201D}',
    '?',
];

/// Check whether a character belongs to the punctuation set
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Remove every punctuation-set character from a token
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Characters that split a paragraph into sentence candidates
///
/// Only the ASCII period is subject to the sentence-final test, the other
/// marks always split.
pub const SENTENCE_DELIMITERS: [char; 4] = ['.', '\u{FF0E}', '\u{3002}', '\u{2022}'];

/// Check whether a character is one of the sentence delimiters
#[inline]
pub fn is_sentence_delimiter(ch: char) -> bool {
    SENTENCE_DELIMITERS.contains(&ch)
}
