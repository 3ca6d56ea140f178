//! Placement of generated text files

use crate::config::OutputConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maps source documents to target files under an output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    manifest: String,
    extension: String,
}

impl OutputLayout {
    /// Layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>, manifest: &str, extension: &str) -> Self {
        Self {
            root: root.into(),
            manifest: manifest.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Layout from the `[output]` section
    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.root, &config.manifest, &config.extension)
    }

    /// Output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Target for a single file: `root/<parent dir name>/<stem>.<ext>`
    pub fn for_file(&self, source: &Path) -> PathBuf {
        let mut target = self.root.clone();
        if let Some(parent) = source.parent().and_then(Path::file_name) {
            target.push(parent);
        }
        target.push(self.file_name(source));
        target
    }

    /// Target for a document found under a named base: `root/<base>/<relative>.<ext>`
    ///
    /// `relative` keeps its directory structure; only its normal components
    /// are used.
    pub fn for_member(&self, base: &str, relative: &Path) -> PathBuf {
        let mut target = self.root.join(base);
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                if let Component::Normal(part) = component {
                    target.push(part);
                }
            }
        }
        target.push(self.file_name(relative));
        target
    }

    fn file_name(&self, source: &Path) -> String {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}.{}", self.extension)
    }

    /// Path of `target` relative to the root, with `/` separators
    pub fn relative(&self, target: &Path) -> String {
        let relative = target.strip_prefix(&self.root).unwrap_or(target);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Write the manifest of generated files, sorted, one per line
    pub fn write_manifest(&self, targets: &[PathBuf]) -> Result<PathBuf> {
        let mut lines: Vec<String> = targets.iter().map(|t| self.relative(t)).collect();
        lines.sort();

        let path = self.root.join(&self.manifest);
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        log::info!("wrote manifest of {} files to {}", lines.len(), path.display());
        Ok(path)
    }
}

/// Remove a previously generated target and create its parent directories
pub fn prepare_target(target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target)
            .with_context(|| format!("Failed to remove old target: {}", target.display()))?;
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Write sentences one per line
pub fn write_sentences(target: &Path, sentences: &[String]) -> Result<()> {
    let mut content = String::with_capacity(sentences.iter().map(|s| s.len() + 1).sum());
    for sentence in sentences {
        content.push_str(sentence);
        content.push('\n');
    }
    fs::write(target, content).with_context(|| format!("Failed to write {}", target.display()))
}
