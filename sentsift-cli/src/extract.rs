//! Plain-text extraction from documents

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Turns a document on disk into plain text
pub trait TextExtractor: Send + Sync {
    /// Extract the text of the document at `path`
    fn extract(&self, path: &Path) -> Result<String>;
}

/// PDF extraction backed by `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

        // pdf-extract panics on some malformed documents
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|_| {
                CliError::ExtractionError(format!("PDF parser panicked on {}", path.display()))
            })?;

        let text = extracted.map_err(|e| {
            CliError::ExtractionError(format!("{}: {e}", path.display()))
        })?;
        log::debug!("extracted {} bytes of text from {}", text.len(), path.display());
        Ok(text)
    }
}
