//! Sentence splitting with abbreviation and decimal protection
//!
//! A period only ends a sentence when it is followed by whitespace or is the
//! last character of the paragraph. Periods inside numbers (`2.5`), dotted
//! names (`java.util`) and run-together initials (`U.S.A`) therefore stay in
//! the text. The full-width period, the ideographic full stop and the bullet
//! always split.
//!
//! Classification happens in a single left-to-right pass, so no placeholder
//! text is ever substituted into the paragraph.

use crate::charset::is_sentence_delimiter;

/// Role of a period in the paragraph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodKind {
    /// Followed by whitespace or at end of text
    SentenceFinal,
    /// Followed by any other character
    Internal,
}

impl PeriodKind {
    /// Classify a period given the character after it
    #[inline]
    pub fn classify(next: Option<char>) -> Self {
        match next {
            None => PeriodKind::SentenceFinal,
            Some(ch) if ch.is_whitespace() => PeriodKind::SentenceFinal,
            Some(_) => PeriodKind::Internal,
        }
    }
}

/// Normalize citation-style closing punctuation before splitting
///
/// `.)` and `!)` both become `. ` so the period ends the sentence. The
/// result is trimmed.
pub fn prepare(paragraph: &str) -> String {
    paragraph
        .replace(".)", ". ")
        .replace("!)", ". ")
        .trim()
        .to_string()
}

/// Split a paragraph into trimmed, non-blank sentence candidates
pub fn split_candidates(paragraph: &str) -> Vec<String> {
    let text = prepare(paragraph);
    let mut candidates = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => match PeriodKind::classify(chars.peek().copied()) {
                PeriodKind::SentenceFinal => push_candidate(&mut candidates, &mut current),
                PeriodKind::Internal => current.push('.'),
            },
            c if is_sentence_delimiter(c) => push_candidate(&mut candidates, &mut current),
            c => current.push(c),
        }
    }
    push_candidate(&mut candidates, &mut current);

    candidates
}

fn push_candidate(candidates: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        candidates.push(trimmed.to_string());
    }
    current.clear();
}

/// Terminate an accepted sentence with a period if it ends in a letter
pub fn finish_sentence(mut sentence: String) -> String {
    if sentence.chars().next_back().is_some_and(char::is_alphabetic) {
        sentence.push('.');
    }
    sentence
}

/// Number of whitespace-delimited words
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_classification() {
        assert_eq!(PeriodKind::classify(None), PeriodKind::SentenceFinal);
        assert_eq!(PeriodKind::classify(Some(' ')), PeriodKind::SentenceFinal);
        assert_eq!(PeriodKind::classify(Some('\n')), PeriodKind::SentenceFinal);
        assert_eq!(PeriodKind::classify(Some('5')), PeriodKind::Internal);
        assert_eq!(PeriodKind::classify(Some('S')), PeriodKind::Internal);
        assert_eq!(PeriodKind::classify(Some(')')), PeriodKind::Internal);
    }

    #[test]
    fn test_prepare_rewrites_closing_parens() {
        assert_eq!(prepare("see (Fig. 2.) next"), "see (Fig. 2.  next");
        assert_eq!(prepare("wow!) more"), "wow.  more");
        assert_eq!(prepare("  padded.  "), "padded.");
    }

    #[test]
    fn test_decimal_is_not_a_boundary() {
        let text = "Version 2.5 was released. It works well today without errors present.";
        assert_eq!(
            split_candidates(text),
            vec![
                "Version 2.5 was released",
                "It works well today without errors present"
            ]
        );
    }

    #[test]
    fn test_dotted_names_and_initials_survive() {
        let text = "Use java.util.List in the U.S.A today. Done.";
        assert_eq!(
            split_candidates(text),
            vec!["Use java.util.List in the U.S.A today", "Done"]
        );
    }

    #[test]
    fn test_abbreviation_followed_by_space_splits() {
        let text = "Ask Dr. Smith about it.";
        assert_eq!(split_candidates(text), vec!["Ask Dr", "Smith about it"]);
    }

    #[test]
    fn test_other_delimiters_always_split() {
        let text = "one•two．three。four";
        assert_eq!(split_candidates(text), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_blank_fragments_discarded() {
        assert_eq!(split_candidates("First. . .  Second."), vec!["First", "Second"]);
        assert_eq!(split_candidates("..."), vec![".."]);
        assert!(split_candidates("   ").is_empty());
    }

    #[test]
    fn test_exclamation_and_question_do_not_split() {
        let text = "Really? Yes! Indeed.";
        assert_eq!(split_candidates(text), vec!["Really? Yes! Indeed"]);
    }

    #[test]
    fn test_citation_paren_splits() {
        let text = "This was shown before (see Smith et al.) Next part";
        assert_eq!(
            split_candidates(text),
            vec!["This was shown before (see Smith et al", "Next part"]
        );
    }

    #[test]
    fn test_finish_sentence() {
        assert_eq!(finish_sentence("Ends in a word".into()), "Ends in a word.");
        assert_eq!(finish_sentence("Ends in a digit 5".into()), "Ends in a digit 5");
        assert_eq!(finish_sentence("Question?".into()), "Question?");
        assert_eq!(finish_sentence("Quoted \"end\"".into()), "Quoted \"end\"");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\tthree\n four "), 4);
        assert_eq!(word_count(""), 0);
    }
}
