//! `text` command: sentence extraction from already-extracted text files

use super::batch::log_stats;
use super::common::{build_pipeline, CommonArgs};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use sentsift_core::{Diagnostics, PipelineStats};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the text command
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Input text files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TextArgs {
    /// Execute the text command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.common.load_config()?;
        let pipeline = build_pipeline(&config)?;
        let files = resolve_patterns(&self.input)?;

        let writer: BoxedWriter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer);

        // Sentences go to stdout, so only draw progress when writing to a file
        let mut progress = ProgressReporter::new(self.common.quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        let mut diagnostics = Diagnostics::new();
        let mut stats = PipelineStats::default();
        let mut skipped = Vec::new();
        for path in &files {
            let label = path.display().to_string();
            let text = match FileReader::read_text_lossy(path) {
                Ok(text) => text,
                Err(e) => {
                    log::error!("failed to process {label}: {e:#}");
                    progress.file_skipped(&label);
                    skipped.push((label, format!("{e:#}")));
                    continue;
                }
            };
            let (sentences, file_stats) = pipeline.extract_with_stats(&text, &mut diagnostics);
            log::info!("{label}: {} sentences", sentences.len());
            stats.merge(&file_stats);

            formatter.begin_document(&label)?;
            for sentence in &sentences {
                formatter.format_sentence(sentence)?;
            }
            progress.file_completed(&label);
        }
        formatter.finish()?;
        progress.finish();
        log_stats(&stats);

        // stdout may carry the sentences, so the summary goes to stderr
        if !self.common.quiet {
            eprintln!(
                "Processed {} files ({} sentences), skipped {}",
                files.len() - skipped.len(),
                stats.sentences,
                skipped.len()
            );
            for (label, reason) in &skipped {
                eprintln!("  skipped {label}: {reason}");
            }
        }

        self.common.write_diagnostics(&diagnostics)?;
        Ok(())
    }
}
