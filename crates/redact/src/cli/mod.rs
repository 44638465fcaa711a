//! Command-line interface for redact.
//!
//! This module provides the CLI structure for the `redact` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, PatternsCommand, RunCommand};

use crate::logging::Verbosity;

/// redact - Obscure sensitive text
///
/// Runs text through a configurable pipeline of redactors: regex patterns
/// with per-match delegates, word blackout, middle masking, literal
/// substrings and URL credentials.
#[derive(Debug, Parser)]
#[command(name = "redact")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Redact text with the configured pipeline
    Run(RunCommand),

    /// List built-in patterns
    Patterns(PatternsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
