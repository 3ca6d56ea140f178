//! Paragraph reconstruction and English sentence filtering for PDF text
//!
//! Text extracted from PDFs arrives with arbitrary line breaks, words
//! hyphenated across lines, damaged typography, and code listings or
//! numbered headings mixed into the prose. This crate turns such text into
//! a list of clean, well-formed English sentences.
//!
//! # Stages
//!
//! 1. [`line`]: classify lines and rejoin hyphen-wrapped words
//! 2. [`assembler`]: build paragraphs, dropping numbered headings
//! 3. [`paragraph`]: reject damaged paragraphs and program code
//! 4. [`splitter`]: split paragraphs into sentence candidates
//! 5. [`sentence`]: apply the acceptance heuristics
//!
//! [`Pipeline`] chains the stages together.
//!
//! # Example
//!
//! ```rust
//! use sentsift_core::{Diagnostics, Pipeline, WordList};
//!
//! let words: WordList = "the a of and to in is it was on that this with for from \
//!     version released works well today without errors present"
//!     .split_whitespace()
//!     .collect();
//! let pipeline = Pipeline::builder().dictionary(words).build().unwrap();
//!
//! let text = "Version 2.5 was released. It works well today without errors \
//!             present in the build.";
//! let mut diagnostics = Diagnostics::new();
//! let sentences = pipeline.extract_sentences(text, &mut diagnostics);
//! assert_eq!(
//!     sentences,
//!     vec!["It works well today without errors present in the build."]
//! );
//! ```

pub mod assembler;
pub mod charset;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexicon;
pub mod line;
pub mod paragraph;
pub mod pipeline;
pub mod sentence;
pub mod splitter;

pub use assembler::{assemble_paragraphs, ParagraphAssembler};
pub use config::{FilterConfig, FilterConfigBuilder};
pub use diagnostics::{Diagnostics, DiagnosticsReport, SharedDiagnostics};
pub use error::{CoreError, Result};
pub use lexicon::{AcceptAll, AlphabeticSegmenter, Dictionary, Segmenter, WordList};
pub use line::LineKind;
pub use paragraph::ParagraphRejection;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineStats};
pub use sentence::{SentenceRejection, SentenceValidator};
pub use splitter::{split_candidates, PeriodKind};
