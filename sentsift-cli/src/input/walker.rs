//! Recursive discovery of PDF documents

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a file should be handed to the PDF extractor
///
/// Hidden files and files without a `.pdf` extension are skipped.
pub fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if name.starts_with('.') {
        log::debug!("skipping hidden file {}", path.display());
        return false;
    }
    if !name.ends_with(".pdf") {
        log::info!("skipping non-PDF file {}", path.display());
        return false;
    }
    true
}

/// Walk `dir` and return every candidate document, in file-name order
pub fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::FileNotFound(dir.display().to_string()).into());
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() && is_candidate(entry.path()) {
            documents.push(entry.into_path());
        }
    }

    log::info!("found {} documents under {}", documents.len(), dir.display());
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate(Path::new("books/ActiveMQ in Action.pdf")));
        assert!(!is_candidate(Path::new("books/.hidden.pdf")));
        assert!(!is_candidate(Path::new("books/notes.txt")));
        assert!(!is_candidate(Path::new("books/scan.PDF")));
        assert!(!is_candidate(Path::new("/")));
    }

    #[test]
    fn test_collect_documents_recurses_and_filters() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("kafka/ops")).unwrap();
        fs::write(dir.path().join("kafka/b.pdf"), "").unwrap();
        fs::write(dir.path().join("kafka/ops/a.pdf"), "").unwrap();
        fs::write(dir.path().join("kafka/readme.md"), "").unwrap();
        fs::write(dir.path().join(".DS_Store"), "").unwrap();
        fs::write(dir.path().join("top.pdf"), "").unwrap();

        let docs = collect_documents(dir.path()).unwrap();
        assert_eq!(
            docs,
            vec![
                dir.path().join("kafka/b.pdf"),
                dir.path().join("kafka/ops/a.pdf"),
                dir.path().join("top.pdf"),
            ]
        );
    }

    #[test]
    fn test_missing_directory() {
        let err = collect_documents(Path::new("/nonexistent/library")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
