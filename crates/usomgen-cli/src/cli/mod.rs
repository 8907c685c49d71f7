//! CLI for the USOM block list generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use usomgen_core::config;

use commands::{run_classify, run_generate, show_config};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "usomgen")]
#[command(about = "Turn the USOM malicious URL list into IP, URL, Pi-hole and uBlock lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the feed and write the four lists.
    Run {
        /// Feed URL (defaults to the configured source).
        #[arg(long)]
        url: Option<String>,
        /// Directory for the generated lists (defaults to the configured one).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Generate the lists from a local copy of the feed (no network).
    Classify {
        /// Path to a downloaded url-list.txt.
        path: PathBuf,
        /// Directory for the generated lists (defaults to the configured one).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { url, output_dir } => {
                if let Some(url) = url {
                    cfg.source_url = url;
                }
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                run_generate(cfg).await?;
            }
            CliCommand::Classify { path, output_dir } => {
                let out = output_dir.unwrap_or_else(|| cfg.output_dir.clone());
                run_classify(path, out).await?;
            }
            CliCommand::Config => show_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
