//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reader for already-extracted text files
pub struct FileReader;

impl FileReader {
    /// Read a file as text, replacing invalid UTF-8 sequences
    ///
    /// Extracted text sometimes carries stray Latin-1 bytes; the replacement
    /// character they turn into is later caught by the paragraph validator.
    pub fn read_text_lossy(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("page.txt");

        let content = "Chapter one\n\nThe first line of text.";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text_lossy(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text_lossy(Path::new("/nonexistent/file.txt"));

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_lossy_replaces_invalid_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, b"caf\xe9 au lait").unwrap();

        let text = FileReader::read_text_lossy(&file_path).unwrap();
        assert_eq!(text, "caf\u{FFFD} au lait");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text_lossy(&file_path).unwrap(), "");
    }
}
