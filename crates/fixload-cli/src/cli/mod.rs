//! CLI for the fixload fixture stager.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixload_core::digest::DigestAlgorithm;
use std::path::PathBuf;

use commands::{run_digest, run_fetch, run_list, run_verify};

/// Top-level CLI for fixload.
#[derive(Debug, Parser)]
#[command(name = "fixload", version)]
#[command(about = "Download and verify the SVG benchmark fixtures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every built-in fixture into the current directory and verify it.
    Fetch,

    /// Verify fixtures already in the current directory (no network).
    Verify,

    /// Show the built-in fixture table.
    List,

    /// Compute the digest of a file.
    Digest {
        /// Path to the file.
        path: PathBuf,

        /// Hash algorithm: md5 or sha256.
        #[arg(long, short, default_value = "md5")]
        algorithm: DigestAlgorithm,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Fetch => run_fetch()?,
            CliCommand::Verify => {
                let base_dir = std::env::current_dir()?;
                run_verify(&base_dir)?;
            }
            CliCommand::List => run_list(),
            CliCommand::Digest { path, algorithm } => run_digest(&path, algorithm)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
