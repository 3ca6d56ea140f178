//! Run-level diagnostic accumulators
//!
//! Two histograms are collected while documents are processed: which
//! illegal code points caused paragraphs to be dropped, and how many words
//! the accepted sentences have. Neither affects the accepted output.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Corrupt-character log and sentence-length histogram for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    corrupt_chars: BTreeMap<u32, u64>,
    sentence_lengths: BTreeMap<usize, u64>,
}

impl Diagnostics {
    /// Create empty accumulators
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both accumulators before a new run
    pub fn reset(&mut self) {
        self.corrupt_chars.clear();
        self.sentence_lengths.clear();
    }

    /// Record an illegal character found in a paragraph
    pub fn record_corrupt_char(&mut self, ch: char) {
        *self.corrupt_chars.entry(ch as u32).or_insert(0) += 1;
    }

    /// Record the word count of an accepted sentence
    pub fn record_sentence_length(&mut self, words: usize) {
        *self.sentence_lengths.entry(words).or_insert(0) += 1;
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: &Diagnostics) {
        for (&cp, &count) in &other.corrupt_chars {
            *self.corrupt_chars.entry(cp).or_insert(0) += count;
        }
        for (&len, &count) in &other.sentence_lengths {
            *self.sentence_lengths.entry(len).or_insert(0) += count;
        }
    }

    /// Check whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.corrupt_chars.is_empty() && self.sentence_lengths.is_empty()
    }

    /// Occurrences recorded for a code point
    pub fn corrupt_char_count(&self, code_point: u32) -> u64 {
        self.corrupt_chars.get(&code_point).copied().unwrap_or(0)
    }

    /// Occurrences recorded for a sentence word count
    pub fn sentence_length_count(&self, words: usize) -> u64 {
        self.sentence_lengths.get(&words).copied().unwrap_or(0)
    }

    /// Recorded code points in ascending order
    pub fn corrupt_code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.corrupt_chars.keys().copied()
    }

    /// Sorted export of both accumulators
    pub fn report(&self) -> DiagnosticsReport {
        DiagnosticsReport {
            sentence_lengths: self
                .sentence_lengths
                .iter()
                .map(|(&words, &count)| LengthEntry { words, count })
                .collect(),
            corrupt_chars: self
                .corrupt_chars
                .iter()
                .map(|(&code_point, &count)| CorruptCharEntry {
                    code_point,
                    character: char::from_u32(code_point)
                        .map(String::from)
                        .unwrap_or_default(),
                    count,
                })
                .collect(),
        }
    }

    /// Write both listings to the log at debug level
    pub fn log_summary(&self) {
        log::debug!("sentence word-count distribution:");
        for (words, count) in &self.sentence_lengths {
            log::debug!("{words} -> {count}");
        }
        log::debug!("unrecognized characters:");
        for (cp, count) in &self.corrupt_chars {
            let rendered = char::from_u32(*cp).unwrap_or(char::REPLACEMENT_CHARACTER);
            log::debug!("{cp}={rendered} ({count})");
        }
    }
}

/// One row of the sentence-length listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthEntry {
    /// Whitespace-delimited word count
    pub words: usize,
    /// Number of accepted sentences with that count
    pub count: u64,
}

/// One row of the corrupt-character listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorruptCharEntry {
    /// Unicode code point
    pub code_point: u32,
    /// The character itself
    pub character: String,
    /// Number of paragraphs rejected because of it
    pub count: u64,
}

/// Serializable, sorted view of [`Diagnostics`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    /// Ascending by word count
    pub sentence_lengths: Vec<LengthEntry>,
    /// Ascending by code point
    pub corrupt_chars: Vec<CorruptCharEntry>,
}

/// Mutex-guarded diagnostics for concurrent document batches
///
/// Workers accumulate into a private [`Diagnostics`] and merge once per
/// document.
#[derive(Debug, Default)]
pub struct SharedDiagnostics {
    inner: Mutex<Diagnostics>,
}

impl SharedDiagnostics {
    /// Create empty shared accumulators
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a worker's accumulators
    pub fn merge(&self, local: &Diagnostics) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(local);
    }

    /// Clear the shared accumulators
    pub fn reset(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Diagnostics {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consume the wrapper and return the accumulated state
    pub fn into_inner(self) -> Diagnostics {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut diag = Diagnostics::new();
        diag.record_corrupt_char('€');
        diag.record_corrupt_char('€');
        diag.record_sentence_length(12);

        assert_eq!(diag.corrupt_char_count(8364), 2);
        assert_eq!(diag.sentence_length_count(12), 1);
        assert_eq!(diag.sentence_length_count(13), 0);
        assert!(!diag.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut diag = Diagnostics::new();
        diag.record_corrupt_char('é');
        diag.record_sentence_length(10);
        diag.reset();
        assert!(diag.is_empty());
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut a = Diagnostics::new();
        a.record_sentence_length(10);
        a.record_corrupt_char('é');

        let mut b = Diagnostics::new();
        b.record_sentence_length(10);
        b.record_sentence_length(11);

        a.merge(&b);
        assert_eq!(a.sentence_length_count(10), 2);
        assert_eq!(a.sentence_length_count(11), 1);
        assert_eq!(a.corrupt_char_count('é' as u32), 1);
    }

    #[test]
    fn test_report_is_sorted() {
        let mut diag = Diagnostics::new();
        diag.record_sentence_length(20);
        diag.record_sentence_length(11);
        diag.record_corrupt_char('€');
        diag.record_corrupt_char('é');

        let report = diag.report();
        let lengths: Vec<usize> = report.sentence_lengths.iter().map(|e| e.words).collect();
        assert_eq!(lengths, vec![11, 20]);

        let points: Vec<u32> = report.corrupt_chars.iter().map(|e| e.code_point).collect();
        assert_eq!(points, vec![233, 8364]);
        assert_eq!(report.corrupt_chars[1].character, "€");
    }

    #[test]
    fn test_shared_diagnostics_merge_and_reset() {
        let shared = SharedDiagnostics::new();
        let mut local = Diagnostics::new();
        local.record_sentence_length(14);

        shared.merge(&local);
        shared.merge(&local);
        assert_eq!(shared.snapshot().sentence_length_count(14), 2);

        shared.reset();
        assert!(shared.into_inner().is_empty());
    }
}
