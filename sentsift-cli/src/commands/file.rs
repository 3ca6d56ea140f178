//! `file` command: PDFs selected by glob patterns

use super::batch::{BatchArgs, BatchRunner, Job};
use super::common::{build_pipeline, CommonArgs};
use crate::extract::PdfExtractor;
use crate::input::{is_candidate, resolve_patterns};
use anyhow::Result;
use clap::Args;

/// Arguments for the file command
#[derive(Debug, Args)]
pub struct FileArgs {
    /// Input PDF files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub batch: BatchArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl FileArgs {
    /// Execute the file command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let pipeline = build_pipeline(&config)?;
        let layout = self.batch.layout(&config);

        let jobs: Vec<Job> = resolve_patterns(&self.input)?
            .into_iter()
            .filter(|path| is_candidate(path))
            .map(|source| Job {
                label: source.display().to_string(),
                target: layout.for_file(&source),
                source,
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
