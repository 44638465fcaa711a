//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Text to redact; reads all of stdin when omitted
    pub text: Option<String>,
}

/// Patterns command arguments.
#[derive(Debug, Args)]
pub struct PatternsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_debug() {
        let cmd = RunCommand {
            text: Some("hello".to_string()),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("hello"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Validate { file: None };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Validate"));
    }
}
