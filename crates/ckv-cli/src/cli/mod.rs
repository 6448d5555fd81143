//! CLI for the CKV checksum calculator and verifier.

mod commands;

use anyhow::Result;
use ckv_core::config::{self, CkvConfig};
use ckv_core::session::Session;
use ckv_core::Algorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_algorithms, run_hash, run_info, run_verify};

/// Top-level CLI for CKV.
#[derive(Debug, Parser)]
#[command(name = "ckv")]
#[command(about = "CKV: calculate and verify file checksums (MD5, SHA-1, SHA-256, SHA-512)", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the checksum of a file.
    Hash {
        /// Path to the file.
        path: PathBuf,
        /// MD5, SHA-1, SHA-256 or SHA-512. Unknown names use SHA-256.
        #[arg(short, long, value_name = "NAME")]
        algorithm: Option<String>,
        /// Print the checksum under every supported algorithm.
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,
    },

    /// Compute the checksum of a file and compare it with an expected value.
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Expected checksum (case and surrounding whitespace are ignored).
        expected: String,
        /// MD5, SHA-1, SHA-256 or SHA-512. Unknown names use SHA-256.
        #[arg(short, long, value_name = "NAME")]
        algorithm: Option<String>,
    },

    /// List supported algorithms.
    Algorithms,

    /// Show file name and size.
    Info {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Algorithm named on the command line, else the configured default.
fn resolve_algorithm(name: Option<&str>, cfg: &CkvConfig) -> Algorithm {
    name.map(Algorithm::from_name_or_default)
        .unwrap_or(cfg.default_algorithm)
}

impl CliCommand {
    /// Only commands that hash read the config file.
    fn needs_config(&self) -> bool {
        matches!(self, CliCommand::Hash { .. } | CliCommand::Verify { .. })
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = if cli.command.needs_config() {
            config::load()?
        } else {
            CkvConfig::default()
        };
        tracing::debug!("using config: {:?}", cfg);

        match cli.command {
            CliCommand::Hash {
                path,
                algorithm,
                all,
            } => {
                let algorithms = if all {
                    Algorithm::ALL.to_vec()
                } else {
                    vec![resolve_algorithm(algorithm.as_deref(), &cfg)]
                };
                run_hash(&path, algorithms, all, cfg.chunk_size).await?;
            }
            CliCommand::Verify {
                path,
                expected,
                algorithm,
            } => {
                let mut session = Session::from_config(&cfg);
                session.set_algorithm(resolve_algorithm(algorithm.as_deref(), &cfg))?;
                run_verify(session, &path, &expected).await?;
            }
            CliCommand::Algorithms => run_algorithms(),
            CliCommand::Info { path } => run_info(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
