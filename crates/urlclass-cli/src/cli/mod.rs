//! CLI for the urlclass URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlclass_core::config;

use commands::{run_classify, run_completions, run_features, run_serve};

/// Top-level CLI for the urlclass URL classifier.
#[derive(Debug, Parser)]
#[command(name = "urlclass")]
#[command(
    about = "urlclass: classify URLs as benign, defacement, phishing or malware",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the single-page classification web form.
    Serve {
        /// Listen address (default from config, 127.0.0.1:8501).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
        /// Random-forest JSON file (default from config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Classify one URL and print the predicted class.
    Classify {
        /// URL to classify (with or without scheme).
        url: String,
        /// Random-forest JSON file (default from config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Print the feature vector extracted from a URL. Needs no model.
    Features {
        /// URL to encode.
        url: String,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Serve { bind, model } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_serve(&cfg, bind.as_deref(), model.as_deref()).await?;
            }
            CliCommand::Classify { url, model } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_classify(&cfg, &url, model.as_deref()).await?;
            }
            CliCommand::Features { url } => run_features(&url).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
