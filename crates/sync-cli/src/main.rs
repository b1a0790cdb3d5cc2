// Modified: 2025-09-20

//! # vibecheck-sync
//!
//! Command-line entry point for the finding-to-issue synchronizer.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod io;

use commands::sync_cmd;

#[derive(Parser)]
#[command(name = "vibecheck-sync")]
#[command(about = "Reconciles static-analysis findings against issue-tracker issues")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one reconciliation pass.
    Sync(sync_cmd::SyncArgs),

    /// Print version information.
    Version,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("vibecheck-sync {}", env!("CARGO_PKG_VERSION"));
            println!("sync-core {}", sync_core::VERSION);
            std::process::ExitCode::SUCCESS
        }
        Commands::Sync(args) => match sync_cmd::execute(args).await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(error) => {
                tracing::error!(%error, "sync run failed");
                std::process::ExitCode::from(error.exit_code() as u8)
            }
        },
    }
}
