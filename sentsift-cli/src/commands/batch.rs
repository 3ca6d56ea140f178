//! Document batch execution shared by the `file`, `dir` and `zip` commands
//!
//! Each job extracts text, runs the pipeline and writes the accepted
//! sentences to its target. A failing job is logged and recorded in the
//! summary; the rest of the batch carries on.

use crate::config::{CliConfig, PerformanceConfig};
use crate::extract::TextExtractor;
use crate::progress::ProgressReporter;
use crate::target::{prepare_target, write_sentences, OutputLayout};
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sentsift_core::{Diagnostics, Pipeline, PipelineStats, SharedDiagnostics};
use std::path::PathBuf;
use std::time::Instant;

/// Output and scheduling flags of the batch commands
#[derive(Debug, Clone, Default, Args)]
pub struct BatchArgs {
    /// Output root directory (default from config: corpus)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Process documents concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default from config, 0 = all CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl BatchArgs {
    /// Output layout with `--output` applied over the config file
    pub fn layout(&self, config: &CliConfig) -> OutputLayout {
        let mut output = config.output.clone();
        if let Some(root) = &self.output {
            output.root = root.clone();
        }
        OutputLayout::from_config(&output)
    }

    /// Worker count, or `None` for sequential processing
    pub fn worker_threads(&self, config: &CliConfig) -> Option<usize> {
        if !self.parallel {
            return None;
        }
        let performance = PerformanceConfig {
            worker_threads: self.threads.unwrap_or(config.performance.worker_threads),
        };
        Some(performance.resolved_threads())
    }
}

/// One document to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Name shown in logs and progress
    pub label: String,
    /// File handed to the extractor
    pub source: PathBuf,
    /// File receiving the sentences
    pub target: PathBuf,
}

/// Outcome of a batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Targets written, in job order
    pub written: Vec<PathBuf>,
    /// Jobs that failed, with the reason
    pub skipped: Vec<(String, String)>,
    /// Sentences written across all targets
    pub sentences: usize,
    /// Pipeline counters summed over the written documents
    pub stats: PipelineStats,
    /// Diagnostics merged across all jobs
    pub diagnostics: Diagnostics,
}

impl BatchSummary {
    /// Print the one-line summary, followed by the skipped documents
    pub fn print(&self, layout: &OutputLayout) {
        println!(
            "Processed {} documents into {} ({} sentences), skipped {}",
            self.written.len(),
            layout.root().display(),
            self.sentences,
            self.skipped.len()
        );
        for (label, reason) in &self.skipped {
            println!("  skipped {label}: {reason}");
        }
    }
}

/// Runs jobs through the pipeline
pub struct BatchRunner<'a> {
    pipeline: &'a Pipeline,
    extractor: &'a dyn TextExtractor,
    progress: ProgressReporter,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner; `quiet` hides the progress bar
    pub fn new(pipeline: &'a Pipeline, extractor: &'a dyn TextExtractor, quiet: bool) -> Self {
        Self {
            pipeline,
            extractor,
            progress: ProgressReporter::new(quiet),
        }
    }

    fn run_job(&self, job: &Job, shared: &SharedDiagnostics) -> Result<PipelineStats> {
        log::info!("processing {}", job.label);
        log::info!("writing {}", job.target.display());

        let text = self.extractor.extract(&job.source)?;
        let mut local = Diagnostics::new();
        let (sentences, stats) = self.pipeline.extract_with_stats(&text, &mut local);
        shared.merge(&local);

        prepare_target(&job.target)?;
        write_sentences(&job.target, &sentences)?;
        Ok(stats)
    }

    fn run_tracked(&self, job: &Job, shared: &SharedDiagnostics) -> Result<PipelineStats> {
        let result = self.run_job(job, shared);
        match &result {
            Ok(_) => self.progress.file_completed(&job.label),
            Err(e) => {
                log::error!("failed to process {}: {e:#}", job.label);
                self.progress.file_skipped(&job.label);
            }
        }
        result
    }

    /// Run every job sequentially, or on `threads` workers when given
    pub fn run(mut self, jobs: &[Job], threads: Option<usize>) -> Result<BatchSummary> {
        let start = Instant::now();
        log::info!("starting batch of {} documents", jobs.len());
        self.progress.init_files(jobs.len() as u64);

        let shared = SharedDiagnostics::new();
        let results: Vec<Result<PipelineStats>> = match threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build worker pool")?;
                pool.install(|| {
                    jobs.par_iter()
                        .map(|job| self.run_tracked(job, &shared))
                        .collect()
                })
            }
            None => jobs
                .iter()
                .map(|job| self.run_tracked(job, &shared))
                .collect(),
        };
        self.progress.finish();

        let mut summary = BatchSummary::default();
        for (job, result) in jobs.iter().zip(results) {
            match result {
                Ok(stats) => {
                    summary.sentences += stats.sentences;
                    summary.stats.merge(&stats);
                    summary.written.push(job.target.clone());
                }
                Err(e) => summary.skipped.push((job.label.clone(), format!("{e:#}"))),
            }
        }
        summary.diagnostics = shared.into_inner();

        log::info!(
            "batch finished in {:.2?}: {} written, {} skipped",
            start.elapsed(),
            summary.written.len(),
            summary.skipped.len()
        );
        log_stats(&summary.stats);
        Ok(summary)
    }
}

/// Log what the filters dropped, at info level
pub fn log_stats(stats: &PipelineStats) {
    log::info!(
        "{} paragraphs ({} corrupt, {} code, {} headings dropped), {} of {} candidates accepted",
        stats.paragraphs,
        stats.paragraphs_rejected_corrupt,
        stats.paragraphs_rejected_code,
        stats.headings_suppressed,
        stats.sentences,
        stats.candidates
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PROSE: &str = "The system reads every page of the book and keeps the clean sentences.";

    /// Treats the file content as the extracted text; fails on "broken"
    struct FakeExtractor;

    impl TextExtractor for FakeExtractor {
        fn extract(&self, path: &Path) -> Result<String> {
            let text = fs::read_to_string(path)?;
            if text == "broken" {
                return Err(CliError::ExtractionError(path.display().to_string()).into());
            }
            Ok(text)
        }
    }

    fn jobs(dir: &TempDir, contents: &[&str]) -> Vec<Job> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| {
                let source = dir.path().join(format!("in/{i}.pdf"));
                fs::create_dir_all(source.parent().unwrap()).unwrap();
                fs::write(&source, content).unwrap();
                Job {
                    label: format!("{i}.pdf"),
                    source,
                    target: dir.path().join(format!("out/{i}.txt")),
                }
            })
            .collect()
    }

    #[test]
    fn test_failed_job_is_skipped_and_batch_continues() {
        let dir = TempDir::new().unwrap();
        let jobs = jobs(&dir, &[PROSE, "broken", PROSE]);
        let pipeline = Pipeline::new();

        let summary = BatchRunner::new(&pipeline, &FakeExtractor, true)
            .run(&jobs, None)
            .unwrap();

        assert_eq!(summary.written, vec![jobs[0].target.clone(), jobs[2].target.clone()]);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].0, "1.pdf");
        assert_eq!(summary.sentences, 2);
        assert_eq!(summary.stats.paragraphs, 2);
        assert_eq!(summary.stats.sentences, 2);
        assert_eq!(summary.stats.candidates, 2);
        assert_eq!(summary.diagnostics.sentence_length_count(13), 2);
        assert_eq!(
            fs::read_to_string(&jobs[0].target).unwrap(),
            format!("{PROSE}\n")
        );
        assert!(!jobs[1].target.exists());
    }

    #[test]
    fn test_batch_args_resolution() {
        let mut config = CliConfig::default();
        config.output.root = PathBuf::from("from-config");
        config.performance.worker_threads = 2;

        let args = BatchArgs::default();
        assert_eq!(args.layout(&config).root(), Path::new("from-config"));
        assert_eq!(args.worker_threads(&config), None);

        let args = BatchArgs {
            output: Some(PathBuf::from("from-flag")),
            parallel: true,
            threads: None,
        };
        assert_eq!(args.layout(&config).root(), Path::new("from-flag"));
        assert_eq!(args.worker_threads(&config), Some(2));

        let args = BatchArgs {
            threads: Some(5),
            ..args
        };
        assert_eq!(args.worker_threads(&config), Some(5));
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let dir = TempDir::new().unwrap();
        let jobs = jobs(&dir, &[PROSE, "Short.", PROSE, "broken"]);
        let pipeline = Pipeline::new();

        let sequential = BatchRunner::new(&pipeline, &FakeExtractor, true)
            .run(&jobs, None)
            .unwrap();
        let parallel = BatchRunner::new(&pipeline, &FakeExtractor, true)
            .run(&jobs, Some(3))
            .unwrap();

        assert_eq!(sequential.written, parallel.written);
        assert_eq!(sequential.skipped, parallel.skipped);
        assert_eq!(sequential.sentences, parallel.sentences);
        assert_eq!(sequential.stats, parallel.stats);
        assert_eq!(sequential.diagnostics, parallel.diagnostics);
    }

    #[test]
    fn test_existing_target_is_replaced() {
        let dir = TempDir::new().unwrap();
        let jobs = jobs(&dir, &["Too short to keep."]);
        fs::create_dir_all(jobs[0].target.parent().unwrap()).unwrap();
        fs::write(&jobs[0].target, "stale content\n").unwrap();

        let pipeline = Pipeline::new();
        BatchRunner::new(&pipeline, &FakeExtractor, true)
            .run(&jobs, None)
            .unwrap();
        assert_eq!(fs::read_to_string(&jobs[0].target).unwrap(), "");
    }
}
