//! `dir` command: every PDF below a directory, plus a manifest

use super::batch::{BatchArgs, BatchRunner, Job};
use super::common::{build_pipeline, CommonArgs};
use crate::extract::PdfExtractor;
use crate::input::collect_documents;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the dir command
#[derive(Debug, Args)]
pub struct DirArgs {
    /// Directory to walk recursively
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl DirArgs {
    /// Execute the dir command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let pipeline = build_pipeline(&config)?;
        let layout = self.batch.layout(&config);

        let base = self.base_name();
        let jobs: Vec<Job> = collect_documents(&self.dir)?
            .into_iter()
            .map(|source| {
                let relative = source.strip_prefix(&self.dir).unwrap_or(&source);
                Job {
                    label: relative.display().to_string(),
                    target: layout.for_member(&base, relative),
                    source: source.clone(),
                }
            })
            .collect();

        let summary = BatchRunner::new(&pipeline, &PdfExtractor, self.common.quiet)
            .run(&jobs, self.batch.worker_threads(&config))?;
        layout.write_manifest(&summary.written)?;

        self.common.write_diagnostics(&summary.diagnostics)?;
        if !self.common.quiet {
            summary.print(&layout);
        }
        Ok(())
    }

    /// Name of the walked directory, used as the first target component
    fn base_name(&self) -> String {
        self.dir
            .canonicalize()
            .ok()
            .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "documents".to_string())
    }
}
