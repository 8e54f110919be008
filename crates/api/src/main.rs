//! JurisREM - legal case management client
//!
//! Main entry point for the command-line application.

use clap::Parser;
use jurisrem_infra::config;
use jurisrem_lib::cli::{self, Cli};
use jurisrem_lib::utils::logging::init_tracing;
use jurisrem_lib::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber reads RUST_LOG
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let args = Cli::parse();

    let mut config = config::load()?;
    args.apply_overrides(&mut config);
    let ctx = AppContext::new_with_config(config)?;

    let mut stdout = std::io::stdout().lock();
    cli::run(&args.command, &ctx, &mut stdout).await
}
