use urlclass_core::logging;

mod cli;
mod web;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; falls back to stderr.
    let log_target = logging::init();
    tracing::debug!(?log_target, "urlclass starting");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        tracing::error!("{:#}", err);
        eprintln!("urlclass error: {:#}", err);
        std::process::exit(1);
    }
}
