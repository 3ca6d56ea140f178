//! `zip` command: PDFs packed in a ZIP archive

use super::batch::{BatchArgs, BatchRunner, Job};
use super::common::{build_pipeline, CommonArgs};
use crate::extract::PdfExtractor;
use crate::input::PdfArchive;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the zip command
#[derive(Debug, Args)]
pub struct ZipArgs {
    /// ZIP archive containing PDF documents
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ZipArgs {
    /// Execute the zip command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let pipeline = build_pipeline(&config)?;
        let layout = self.batch.layout(&config);

        let mut archive = PdfArchive::open(&self.archive)?;
        let scratch = tempfile::Builder::new()
            .prefix("sentsift-")
            .tempdir()
            .context("Failed to create scratch directory")?;
        let entries = archive.extract_pdfs(scratch.path())?;

        let base = archive.stem();
        let jobs: Vec<Job> = entries
            .iter()
            .map(|entry| Job {
                label: entry.name.display().to_string(),
                source: entry.scratch.clone(),
                target: layout.for_member(&base, &entry.name),
            })
            .collect();

        let summary = BatchRunner::new(&pipeline, &PdfExtractor, self.common.quiet)
            .run(&jobs, self.batch.worker_threads(&config))?;

        self.common.write_diagnostics(&summary.diagnostics)?;
        if !self.common.quiet {
            summary.print(&layout);
        }
        Ok(())
    }
}
