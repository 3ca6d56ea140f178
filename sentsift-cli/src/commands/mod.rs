//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod archive;
pub mod batch;
pub mod common;
pub mod dir;
pub mod file;
pub mod generate_config;
pub mod text;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract sentences from PDF files matched by glob patterns
    File(file::FileArgs),

    /// Extract sentences from every PDF below a directory and write a manifest
    Dir(dir::DirArgs),

    /// Extract sentences from the PDFs inside a ZIP archive
    Zip(archive::ZipArgs),

    /// Extract sentences from already-extracted plain text files
    Text(text::TextArgs),

    /// Write a documented default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file and show the effective settings
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::File(args) => args.execute(),
            Commands::Dir(args) => args.execute(),
            Commands::Zip(args) => args.execute(),
            Commands::Text(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        TestCli::try_parse_from(std::iter::once("sentsift").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_file_command() {
        match parse(&["file", "-i", "a.pdf", "-i", "b/*.pdf", "-o", "out", "-p", "-vv"]) {
            Commands::File(args) => {
                assert_eq!(args.input, vec!["a.pdf", "b/*.pdf"]);
                assert_eq!(args.batch.output, Some(PathBuf::from("out")));
                assert!(args.batch.parallel);
                assert_eq!(args.common.verbose, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_dir_command_with_common_flags() {
        match parse(&[
            "dir",
            "library",
            "--dictionary",
            "words.txt",
            "--diagnostics",
            "diag.json",
            "--threads",
            "4",
            "-q",
        ]) {
            Commands::Dir(args) => {
                assert_eq!(args.dir, PathBuf::from("library"));
                assert_eq!(args.common.dictionary, Some(PathBuf::from("words.txt")));
                assert_eq!(args.common.diagnostics, Some(PathBuf::from("diag.json")));
                assert_eq!(args.batch.threads, Some(4));
                assert!(args.common.quiet);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_text_command_format() {
        match parse(&["text", "-i", "page.txt", "-f", "json"]) {
            Commands::Text(args) => {
                assert_eq!(args.format, crate::output::OutputFormat::Json);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_zip_and_config_commands() {
        assert!(matches!(parse(&["zip", "books.zip"]), Commands::Zip(_)));
        assert!(matches!(
            parse(&["generate-config", "-o", "sentsift.toml"]),
            Commands::GenerateConfig(_)
        ));
        assert!(matches!(
            parse(&["validate", "-c", "sentsift.toml"]),
            Commands::Validate(_)
        ));
    }

    #[test]
    fn test_missing_required_input_is_rejected() {
        let result = TestCli::try_parse_from(["sentsift", "file"]);
        assert!(result.is_err());
    }
}
