//! Dictionary and tokenizer collaborators
//!
//! The unknown-word check needs a membership test and a way to split a
//! sentence into words. Both are narrow traits so that callers can plug in
//! their own word lists and tokenizers, and tests can use in-memory fakes.

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Word membership test
///
/// Callers pass lower-cased words.
pub trait Dictionary: Send + Sync {
    /// Check whether the word is known
    fn contains(&self, word: &str) -> bool;
}

/// Splits a sentence into word tokens
pub trait Segmenter: Send + Sync {
    /// Tokenize the text
    fn segment(&self, text: &str) -> Vec<String>;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// In-memory word list
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Create an empty word list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a newline-separated word list
    ///
    /// Blank lines and lines starting with `#` are skipped. Only the first
    /// whitespace-separated field of a line is used, so frequency lists and
    /// "word definition" dumps load as well.
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next())
            .collect()
    }

    /// Load a newline-separated word list from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::parse(&content);
        log::info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Add a word (stored lower-cased)
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }
}

/// Dictionary that knows every word
///
/// Used when no word list is configured; the unknown-word check then never
/// rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn contains(&self, _word: &str) -> bool {
        true
    }
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        Regex::new(r"\p{Alphabetic}+(?:['’]\p{Alphabetic}+)*").expect("word pattern is valid")
    })
}

/// Tokenizer yielding maximal runs of letters
///
/// Apostrophe-joined contractions such as `don't` stay one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticSegmenter;

impl Segmenter for AlphabeticSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        word_pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_word_list_lowercases() {
        let list: WordList = ["The", "quick", "BROWN"].into_iter().collect();
        assert_eq!(list.len(), 3);
        assert!(list.contains("the"));
        assert!(list.contains("brown"));
        assert!(list.contains("Quick"));
        assert!(!list.contains("fox"));
    }

    #[test]
    fn test_word_list_parse_skips_comments() {
        let list = WordList::parse("# header\nalpha\n\n  beta 42\ngamma\tnoun\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("alpha"));
        assert!(list.contains("beta"));
        assert!(list.contains("gamma"));
        assert!(!list.contains("42"));
    }

    #[test]
    fn test_word_list_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one\ntwo\nthree").unwrap();

        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("two"));
    }

    #[test]
    fn test_word_list_missing_file() {
        assert!(WordList::from_file(Path::new("/nonexistent/words.txt")).is_err());
    }

    #[test]
    fn test_hash_set_dictionary() {
        let set: HashSet<String> = ["apple".to_string()].into_iter().collect();
        let dict: &dyn Dictionary = &set;
        assert!(dict.contains("apple"));
        assert!(!dict.contains("pear"));
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.contains("zzxqv"));
        assert!(AcceptAll.contains(""));
    }

    #[test]
    fn test_alphabetic_segmenter() {
        let tokens = AlphabeticSegmenter.segment("Don't split 2.5 items, (please) now!");
        assert_eq!(tokens, vec!["Don't", "split", "items", "please", "now"]);
    }

    #[test]
    fn test_segmenter_keeps_ligatures_and_curly_apostrophes() {
        let tokens = AlphabeticSegmenter.segment("the ﬁrst author’s work");
        assert_eq!(tokens, vec!["the", "ﬁrst", "author’s", "work"]);
    }
}
