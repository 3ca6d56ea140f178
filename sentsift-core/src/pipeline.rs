//! End-to-end sentence extraction
//!
//! Raw text flows through the paragraph assembler, the paragraph validator,
//! the splitter and finally the sentence validator. Each document is
//! processed sequentially; independent documents can be processed in
//! parallel with [`Pipeline::process_documents`].

use crate::assembler::ParagraphAssembler;
use crate::config::FilterConfig;
use crate::diagnostics::{Diagnostics, SharedDiagnostics};
use crate::error::Result;
use crate::lexicon::{AcceptAll, AlphabeticSegmenter, Dictionary, Segmenter};
use crate::paragraph::{self, ParagraphRejection};
use crate::sentence::SentenceValidator;
use crate::splitter::{finish_sentence, split_candidates, word_count};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counters describing one extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Paragraphs produced by the assembler
    pub paragraphs: usize,
    /// Paragraphs dropped for illegal characters
    pub paragraphs_rejected_corrupt: usize,
    /// Paragraphs dropped as program code
    pub paragraphs_rejected_code: usize,
    /// Numbered headings and captions dropped during assembly
    pub headings_suppressed: usize,
    /// Sentence candidates produced by the splitter
    pub candidates: usize,
    /// Candidates dropped by the sentence validator
    pub sentences_rejected: usize,
    /// Sentences accepted
    pub sentences: usize,
}

impl PipelineStats {
    /// Add another set of counters to this one
    pub fn merge(&mut self, other: &PipelineStats) {
        self.paragraphs += other.paragraphs;
        self.paragraphs_rejected_corrupt += other.paragraphs_rejected_corrupt;
        self.paragraphs_rejected_code += other.paragraphs_rejected_code;
        self.headings_suppressed += other.headings_suppressed;
        self.candidates += other.candidates;
        self.sentences_rejected += other.sentences_rejected;
        self.sentences += other.sentences;
    }
}

/// Sentence extraction pipeline
pub struct Pipeline {
    config: FilterConfig,
    dictionary: Box<dyn Dictionary>,
    segmenter: Box<dyn Segmenter>,
}

impl Pipeline {
    /// Pipeline with default thresholds, no dictionary and the alphabetic segmenter
    pub fn new() -> Self {
        Self {
            config: FilterConfig::default(),
            dictionary: Box::new(AcceptAll),
            segmenter: Box::new(AlphabeticSegmenter),
        }
    }

    /// Start building a pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Thresholds in use
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn validator(&self) -> SentenceValidator<'_> {
        SentenceValidator::new(&self.config, self.dictionary.as_ref(), self.segmenter.as_ref())
    }

    /// Extract accepted sentences from raw text
    pub fn extract_sentences(&self, text: &str, diagnostics: &mut Diagnostics) -> Vec<String> {
        self.extract_with_stats(text, diagnostics).0
    }

    /// Extract accepted sentences and report what was dropped along the way
    pub fn extract_with_stats(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> (Vec<String>, PipelineStats) {
        let mut stats = PipelineStats::default();
        let mut output = Vec::new();

        let mut assembler = ParagraphAssembler::new(text);
        for paragraph in assembler.by_ref() {
            self.process_paragraph_counted(&paragraph, diagnostics, &mut output, &mut stats);
        }
        stats.headings_suppressed = assembler.suppressed_headings();

        log::debug!(
            "{} paragraphs, {} candidates, {} sentences accepted",
            stats.paragraphs,
            stats.candidates,
            stats.sentences
        );
        (output, stats)
    }

    /// Validate one paragraph and append its accepted sentences to `output`
    pub fn process_paragraph(
        &self,
        paragraph: &str,
        diagnostics: &mut Diagnostics,
        output: &mut Vec<String>,
    ) {
        let mut stats = PipelineStats::default();
        self.process_paragraph_counted(paragraph, diagnostics, output, &mut stats);
    }

    fn process_paragraph_counted(
        &self,
        paragraph: &str,
        diagnostics: &mut Diagnostics,
        output: &mut Vec<String>,
        stats: &mut PipelineStats,
    ) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            return;
        }
        stats.paragraphs += 1;
        log::trace!("paragraph: {paragraph}");

        if let Err(reason) = paragraph::check(paragraph, diagnostics) {
            log::debug!("dropping paragraph ({reason}): {paragraph}");
            match reason {
                ParagraphRejection::CorruptChar { .. } => stats.paragraphs_rejected_corrupt += 1,
                ParagraphRejection::ProgramCode => stats.paragraphs_rejected_code += 1,
            }
            return;
        }

        let validator = self.validator();
        for candidate in split_candidates(paragraph) {
            stats.candidates += 1;
            let Some(accepted) = validator.accept(&candidate) else {
                stats.sentences_rejected += 1;
                continue;
            };
            let sentence = finish_sentence(accepted);
            if self.config.record_lengths {
                diagnostics.record_sentence_length(word_count(&sentence));
            }
            log::trace!("sentence: {sentence}");
            stats.sentences += 1;
            output.push(sentence);
        }
    }

    /// Extract sentences from several independent documents
    ///
    /// Results keep the input order. Each document accumulates diagnostics
    /// locally and merges them into `shared` once finished.
    pub fn process_documents<S>(&self, texts: &[S], shared: &SharedDiagnostics) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let run = |text: &S| {
            let mut local = Diagnostics::new();
            let sentences = self.extract_sentences(text.as_ref(), &mut local);
            shared.merge(&local);
            sentences
        };

        #[cfg(feature = "parallel")]
        {
            texts.par_iter().map(run).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(run).collect()
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Pipeline`]
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<FilterConfig>,
    dictionary: Option<Box<dyn Dictionary>>,
    segmenter: Option<Box<dyn Segmenter>>,
}

impl PipelineBuilder {
    /// Use the given thresholds
    pub fn config(mut self, config: FilterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use the given dictionary for the unknown-word check
    pub fn dictionary<D: Dictionary + 'static>(mut self, dictionary: D) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    /// Use the given tokenizer for the unknown-word check
    pub fn segmenter<T: Segmenter + 'static>(mut self, segmenter: T) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    /// Validate the thresholds and build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(Pipeline {
            config,
            dictionary: self.dictionary.unwrap_or_else(|| Box::new(AcceptAll)),
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Box::new(AlphabeticSegmenter)),
        })
    }
}
