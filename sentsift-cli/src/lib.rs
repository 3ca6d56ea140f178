//! sentsift CLI library
//!
//! This library provides the command-line interface for building English
//! sentence corpora from PDF documents with `sentsift-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod progress;
pub mod target;

pub use error::{CliError, CliResult};
