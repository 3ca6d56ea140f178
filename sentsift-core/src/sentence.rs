//! Heuristic acceptance checks for candidate sentences
//!
//! Each check is an independent necessary condition. They run in a fixed
//! order and the first failure is reported as a [`SentenceRejection`], which
//! is a normal outcome rather than an error.

use crate::charset::strip_punctuation;
use crate::config::FilterConfig;
use crate::lexicon::{Dictionary, Segmenter};
use std::collections::HashSet;
use std::fmt;

/// Why a candidate sentence was dropped
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceRejection {
    /// Blank, or ends with a comma
    Ignorable,
    /// No letter at all, or the first character is not upper-case
    InvalidFirstWord,
    /// Fewer words than the configured minimum
    TooFewWords {
        /// Words found
        count: usize,
        /// Configured minimum
        min: usize,
    },
    /// The last word is a number
    NumericLastWord,
    /// Too many words start with a capital letter
    TooManyCapitalized {
        /// Capitalized words
        capitalized: usize,
        /// All words
        total: usize,
    },
    /// A word (other than a URL) is too long
    LongWord {
        /// Length in characters of the longest word
        length: usize,
        /// Configured maximum
        max: usize,
    },
    /// Too many words that are not purely alphabetic after punctuation removal
    TooManySpecialWords {
        /// Special words found
        special: usize,
        /// Permitted bound
        limit: f64,
    },
    /// Too many distinct words missing from the dictionary
    TooManyUnknownWords {
        /// Unknown distinct words
        unknown: usize,
        /// All distinct words
        distinct: usize,
    },
    /// Openers and closers do not match in number
    UnbalancedBrackets {
        /// Count of `[`, `“`, `(`
        open: usize,
        /// Count of `]`, `”`, `)`
        close: usize,
    },
    /// Odd number of ASCII double quotes
    UnpairedQuotes {
        /// Count of `"`
        count: usize,
    },
}

impl fmt::Display for SentenceRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceRejection::Ignorable => write!(f, "blank or partial sentence"),
            SentenceRejection::InvalidFirstWord => write!(f, "invalid first word"),
            SentenceRejection::TooFewWords { count, min } => {
                write!(f, "insufficient word count ({count} < {min})")
            }
            SentenceRejection::NumericLastWord => write!(f, "numeric last word"),
            SentenceRejection::TooManyCapitalized { capitalized, total } => {
                write!(f, "too many capitalized words ({capitalized} of {total})")
            }
            SentenceRejection::LongWord { length, max } => {
                write!(f, "word too long ({length} > {max} chars)")
            }
            SentenceRejection::TooManySpecialWords { special, limit } => {
                write!(f, "too many special words ({special} > {limit:.2})")
            }
            SentenceRejection::TooManyUnknownWords { unknown, distinct } => {
                write!(f, "too many unknown words ({unknown} of {distinct})")
            }
            SentenceRejection::UnbalancedBrackets { open, close } => {
                write!(f, "unbalanced brackets ({open} open, {close} close)")
            }
            SentenceRejection::UnpairedQuotes { count } => {
                write!(f, "unpaired quotes ({count})")
            }
        }
    }
}

/// Runs the acceptance battery against candidate sentences
pub struct SentenceValidator<'a> {
    config: &'a FilterConfig,
    dictionary: &'a dyn Dictionary,
    segmenter: &'a dyn Segmenter,
}

impl<'a> SentenceValidator<'a> {
    /// Create a validator over borrowed collaborators
    pub fn new(
        config: &'a FilterConfig,
        dictionary: &'a dyn Dictionary,
        segmenter: &'a dyn Segmenter,
    ) -> Self {
        Self {
            config,
            dictionary,
            segmenter,
        }
    }

    /// Return the sentence if it passes every check
    pub fn accept(&self, sentence: &str) -> Option<String> {
        match self.check(sentence) {
            Ok(()) => Some(sentence.to_string()),
            Err(reason) => {
                log::debug!("dropping sentence ({reason}): {sentence}");
                None
            }
        }
    }

    /// Run every check in order, stopping at the first failure
    pub fn check(&self, sentence: &str) -> Result<(), SentenceRejection> {
        if is_ignorable(sentence) {
            return Err(SentenceRejection::Ignorable);
        }
        if has_invalid_first_word(sentence) {
            return Err(SentenceRejection::InvalidFirstWord);
        }

        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() < self.config.min_words {
            return Err(SentenceRejection::TooFewWords {
                count: words.len(),
                min: self.config.min_words,
            });
        }
        if words.last().is_some_and(|w| is_numeric(w)) {
            return Err(SentenceRejection::NumericLastWord);
        }

        let capitalized = capitalized_count(&words);
        if capitalized as f64 > words.len() as f64 * self.config.max_capitalized_ratio {
            return Err(SentenceRejection::TooManyCapitalized {
                capitalized,
                total: words.len(),
            });
        }

        let longest = longest_word(&words);
        if longest > self.config.max_word_chars {
            return Err(SentenceRejection::LongWord {
                length: longest,
                max: self.config.max_word_chars,
            });
        }

        let special = special_word_count(&words);
        let limit = self.config.special_word_limit(words.len());
        if special as f64 > limit {
            return Err(SentenceRejection::TooManySpecialWords { special, limit });
        }

        let (unknown, distinct) = self.unknown_words(sentence);
        if unknown as f64 > distinct as f64 * self.config.max_unknown_ratio {
            return Err(SentenceRejection::TooManyUnknownWords { unknown, distinct });
        }

        let (open, close, quotes) = bracket_counts(sentence);
        if open != close {
            return Err(SentenceRejection::UnbalancedBrackets { open, close });
        }
        if quotes % 2 != 0 {
            return Err(SentenceRejection::UnpairedQuotes { count: quotes });
        }

        Ok(())
    }

    /// Count distinct lower-cased tokens, and how many the dictionary lacks
    fn unknown_words(&self, sentence: &str) -> (usize, usize) {
        let distinct: HashSet<String> = self
            .segmenter
            .segment(sentence)
            .into_iter()
            .map(|token| token.to_lowercase())
            .collect();
        let unknown = distinct
            .iter()
            .filter(|word| !self.dictionary.contains(word))
            .count();
        (unknown, distinct.len())
    }
}

fn is_ignorable(sentence: &str) -> bool {
    let trimmed = sentence.trim();
    trimmed.is_empty() || trimmed.ends_with(',')
}

// The case test looks at position 0, not at the first letter found by the scan.
fn has_invalid_first_word(sentence: &str) -> bool {
    if !sentence.chars().any(char::is_alphabetic) {
        return true;
    }
    !sentence.chars().next().is_some_and(char::is_uppercase)
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn capitalized_count(words: &[&str]) -> usize {
    words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count()
}

fn longest_word(words: &[&str]) -> usize {
    words
        .iter()
        .filter(|w| !w.contains("http://"))
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
}

fn special_word_count(words: &[&str]) -> usize {
    words
        .iter()
        .map(|w| strip_punctuation(w))
        .filter(|w| !w.trim().is_empty() && !w.chars().all(char::is_alphabetic))
        .count()
}

fn bracket_counts(sentence: &str) -> (usize, usize, usize) {
    sentence
        .chars()
        .fold((0, 0, 0), |(open, close, quotes), ch| match ch {
            '[' | '\u{201C}' | '(' => (open + 1, close, quotes),
            ']' | '\u{201D}' | ')' => (open, close + 1, quotes),
            '"' => (open, close, quotes + 1),
            _ => (open, close, quotes),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{AcceptAll, AlphabeticSegmenter, WordList};

    const BASE: &str = "The cat sat on the mat and then it went home";

    fn check_with(sentence: &str, dictionary: &dyn Dictionary) -> Result<(), SentenceRejection> {
        let config = FilterConfig::default();
        SentenceValidator::new(&config, dictionary, &AlphabeticSegmenter).check(sentence)
    }

    fn check(sentence: &str) -> Result<(), SentenceRejection> {
        check_with(sentence, &AcceptAll)
    }

    #[test]
    fn test_base_sentence_has_ten_words_and_passes() {
        assert_eq!(BASE.split_whitespace().count(), 10);
        assert_eq!(check(BASE), Ok(()));
    }

    #[test]
    fn test_ignorable() {
        assert_eq!(check("   "), Err(SentenceRejection::Ignorable));
        assert_eq!(
            check("The cat sat on the mat and then it went home,"),
            Err(SentenceRejection::Ignorable)
        );
    }

    #[test]
    fn test_invalid_first_word() {
        assert_eq!(
            check("the cat sat on the mat and then it went home"),
            Err(SentenceRejection::InvalidFirstWord)
        );
        assert_eq!(
            check("1 2 3 4 5 6 7 8 9 10"),
            Err(SentenceRejection::InvalidFirstWord)
        );
        // A leading quote hides the capital letter from the position-0 test.
        assert_eq!(
            check("\"The cat sat on the mat and then it went home\""),
            Err(SentenceRejection::InvalidFirstWord)
        );
    }

    #[test]
    fn test_word_floor() {
        assert_eq!(
            check("The cat sat on the mat and then it went"),
            Err(SentenceRejection::TooFewWords { count: 9, min: 10 })
        );
    }

    #[test]
    fn test_numeric_last_word() {
        assert_eq!(
            check("The cat sat on the mat and then it went 42"),
            Err(SentenceRejection::NumericLastWord)
        );
        // A superscript is not a number
        assert_eq!(check("The cat sat on the mat and then it went \u{00B2}"), Ok(()));
    }

    #[test]
    fn test_capitalization_ratio_boundary() {
        // Four of ten capitalized is exactly 40 percent and passes.
        assert_eq!(check("The Cat sat On the Mat and then it went home"), Ok(()));
        assert_eq!(
            check("The Cat Sat On the Mat and then it went home"),
            Err(SentenceRejection::TooManyCapitalized {
                capitalized: 5,
                total: 10
            })
        );
    }

    #[test]
    fn test_long_word_boundary() {
        let eighteen = "a".repeat(18);
        let nineteen = "a".repeat(19);
        let ok = format!("The cat sat on the mat and then it went {eighteen}");
        let bad = format!("The cat sat on the mat and then it went {nineteen}");
        assert_eq!(check(&ok), Ok(()));
        assert_eq!(
            check(&bad),
            Err(SentenceRejection::LongWord {
                length: 19,
                max: 18
            })
        );
    }

    #[test]
    fn test_long_urls_are_exempt() {
        let sentence =
            "The cat sat on the mat and then it went http://example.com/a-very-long-path";
        assert_eq!(check(sentence), Ok(()));
    }

    #[test]
    fn test_special_word_ratio() {
        // ln(10) / 2 is about 1.15, so one special word is allowed.
        assert_eq!(check("The cat sat on the mat and then it went x2"), Ok(()));
        assert!(matches!(
            check("The cat sat on the mat and then it went x2 y3"),
            Err(SentenceRejection::TooManySpecialWords { special: 2, .. })
        ));
    }

    #[test]
    fn test_punctuation_does_not_make_words_special() {
        assert_eq!(
            check("The cat, (sat) on the mat; and then it went home!"),
            Ok(())
        );
    }

    #[test]
    fn test_unknown_word_ratio_boundary() {
        // Ten distinct tokens once "the" is folded. Four unknown passes, five fails.
        let known: WordList = ["the", "cat", "sat", "on", "mat", "and"].into_iter().collect();
        assert_eq!(check_with(BASE, &known), Ok(()));

        let fewer: WordList = ["the", "cat", "sat", "on", "mat"].into_iter().collect();
        assert_eq!(
            check_with(BASE, &fewer),
            Err(SentenceRejection::TooManyUnknownWords {
                unknown: 5,
                distinct: 10
            })
        );
    }

    #[test]
    fn test_unbalanced_brackets() {
        assert_eq!(
            check("The cat (sat on the mat and then it went home"),
            Err(SentenceRejection::UnbalancedBrackets { open: 1, close: 0 })
        );
        assert_eq!(check("The cat (sat) on the mat and then it went home"), Ok(()));
    }

    #[test]
    fn test_quote_parity() {
        assert_eq!(
            check("The cat \"sat\" on the mat and then it went home"),
            Ok(())
        );
        assert_eq!(
            check("The cat \"sat on the mat and then it went home"),
            Err(SentenceRejection::UnpairedQuotes { count: 1 })
        );
    }

    #[test]
    fn test_accept_returns_sentence() {
        let config = FilterConfig::default();
        let validator = SentenceValidator::new(&config, &AcceptAll, &AlphabeticSegmenter);
        assert_eq!(validator.accept(BASE), Some(BASE.to_string()));
        assert_eq!(validator.accept("Too short"), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = FilterConfig::builder().min_words(3).build().unwrap();
        let validator = SentenceValidator::new(&config, &AcceptAll, &AlphabeticSegmenter);
        assert!(validator.check("The cat sat").is_ok());
    }

    #[test]
    fn test_rejection_display() {
        let reason = SentenceRejection::TooFewWords { count: 4, min: 10 };
        assert_eq!(reason.to_string(), "insufficient word count (4 < 10)");
    }
}
