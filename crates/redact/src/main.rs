//! `redact` - CLI for the redact library
//!
//! This binary runs text through the configured redaction pipeline and
//! inspects the configuration and built-in patterns.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use redact::cli::{Cli, Command, ConfigCommand, PatternsCommand, RunCommand};
use redact::pattern::builtin_patterns;
use redact::{init_logging, Config, Redactor, Result};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match cli.command {
        Command::Run(run_cmd) => {
            let config = Config::load_from(cli.config)?;
            handle_run(&config, run_cmd)?;
        }
        Command::Patterns(patterns_cmd) => handle_patterns(&patterns_cmd)?,
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd)?,
    }
    Ok(())
}

/// The text given on the command line, or everything `reader` yields.
fn read_input(text: Option<String>, mut reader: impl Read) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn handle_run(config: &Config, cmd: RunCommand) -> Result<()> {
    let input = read_input(cmd.text, io::stdin())?;

    let pipeline = config.build_pipeline()?;
    debug!(steps = pipeline.len(), input_len = input.len(), "Running pipeline");

    let redacted = pipeline.redact(&input)?;
    print!("{redacted}");
    if !redacted.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn patterns_json() -> Result<String> {
    let patterns: Vec<_> = builtin_patterns()
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "description": p.description,
                "pattern": p.pattern,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&patterns)?)
}

fn handle_patterns(cmd: &PatternsCommand) -> Result<()> {
    if cmd.json {
        println!("{}", patterns_json()?);
    } else {
        for p in builtin_patterns() {
            println!("{:<14} {}", p.name, p.description);
            println!("{:<14} {}", "", p.pattern);
        }
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Pipeline]");
                match config.pipeline.max_substitutions {
                    Some(limit) => println!("  Max substitutions:  {limit}"),
                    None => println!("  Max substitutions:  unlimited"),
                }
                println!("  Steps:              {}", config.pipeline.steps.len());
                for (index, step) in config.pipeline.steps.iter().enumerate() {
                    println!("    {index}: {}", step.kind());
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
