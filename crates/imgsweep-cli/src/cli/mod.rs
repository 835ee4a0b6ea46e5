//! CLI for imgsweep.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use imgsweep_core::config::{self, SweepConfig};
use std::path::PathBuf;

use commands::{run_pipeline, run_scan, run_show_config};

/// Top-level CLI for imgsweep.
#[derive(Debug, Parser)]
#[command(name = "imgsweep")]
#[command(about = "imgsweep: download every JPEG linked from a delimited text file", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/imgsweep/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Input selection shared by `run` and `scan`.
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct InputArgs {
    /// Delimited text file to scan (overrides `input_path`).
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Field delimiter: a single character, or `tab` / `\t`.
    #[arg(long, value_name = "CHAR", value_parser = parse_delimiter)]
    pub delimiter: Option<char>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract image URLs and download them in batches.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write images to (overrides `output_dir`).
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Downloads started together; the next batch waits for all of them.
        #[arg(long, value_name = "N")]
        batch_size: Option<usize>,

        /// Per-request timeout in seconds.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// List the unique image URLs that `run` would download, without downloading.
    Scan {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the config file location and the effective configuration.
    Config,
}

/// Parses a delimiter argument. `tab` and the two-character escape `\t` mean a tab.
pub fn parse_delimiter(s: &str) -> std::result::Result<char, String> {
    match s {
        "tab" | "\\t" => return Ok('\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("delimiter must be a single character, got {:?}", s)),
    }
}

impl InputArgs {
    fn apply(&self, cfg: &mut SweepConfig) {
        if let Some(path) = &self.input {
            cfg.input_path = path.clone();
        }
        if let Some(d) = self.delimiter {
            cfg.delimiter = d;
        }
    }
}

/// Applies command-line overrides on top of the loaded config.
pub fn apply_overrides(command: &CliCommand, cfg: &mut SweepConfig) {
    match command {
        CliCommand::Run {
            input,
            output,
            batch_size,
            timeout_secs,
        } => {
            input.apply(cfg);
            if let Some(dir) = output {
                cfg.output_dir = dir.clone();
            }
            if let Some(n) = batch_size {
                cfg.batch_size = *n;
            }
            if let Some(secs) = timeout_secs {
                cfg.request_timeout_secs = *secs;
            }
        }
        CliCommand::Scan { input } => input.apply(cfg),
        CliCommand::Config => {}
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init().context("failed to load config")?,
        };
        apply_overrides(&cli.command, &mut cfg);
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { .. } => run_pipeline(&cfg).await?,
            CliCommand::Scan { .. } => run_scan(&cfg).await?,
            CliCommand::Config => run_show_config(cli.config.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
