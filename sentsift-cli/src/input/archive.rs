//! PDF documents packed in a ZIP archive
//!
//! The PDF parser works on files, so every PDF entry is copied out to a
//! scratch directory before processing.

use super::walker::is_candidate;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// A PDF entry copied out of an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry inside the archive
    pub name: PathBuf,
    /// Where the entry's bytes were written
    pub scratch: PathBuf,
}

/// Read-only view of a ZIP archive
pub struct PdfArchive {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl PdfArchive {
    /// Open an archive on disk
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let file = File::open(path)
            .with_context(|| format!("Failed to open archive: {}", path.display()))?;
        let archive = ZipArchive::new(file)
            .with_context(|| format!("Failed to read archive: {}", path.display()))?;
        log::info!("opened {} ({} entries)", path.display(), archive.len());

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// File stem of the archive, used to namespace its outputs
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archive".to_string())
    }

    /// Copy every PDF entry into `scratch_dir`
    ///
    /// Entries whose names would escape the archive root are ignored.
    pub fn extract_pdfs(&mut self, scratch_dir: &Path) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::new();

        for index in 0..self.archive.len() {
            let mut entry = self
                .archive
                .by_index(index)
                .with_context(|| format!("Failed to read entry {index} of {}", self.path.display()))?;
            if entry.is_dir() {
                continue;
            }
            let Some(name) = entry.enclosed_name() else {
                log::warn!("ignoring unsafe entry name {:?}", entry.name());
                continue;
            };
            if !is_candidate(&name) {
                continue;
            }

            let scratch = scratch_dir.join(format!("entry-{index}.pdf"));
            let mut out = File::create(&scratch)
                .with_context(|| format!("Failed to create {}", scratch.display()))?;
            io::copy(&mut entry, &mut out)
                .with_context(|| format!("Failed to copy {} out of the archive", name.display()))?;
            log::debug!("copied {} to {}", name.display(), scratch.display());

            entries.push(ArchiveEntry { name, scratch });
        }

        Ok(entries)
    }
}
