//! Memlens CLI
//!
//! Read-only diagnostics for the local memlens vector store.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use memlens_core::{MemlensError, Store};
use std::process::ExitCode;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version are not failures; everything else exits 1
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    // Open store (use MEMLENS_DB env var if set, otherwise use default)
    let db_path = std::env::var("MEMLENS_DB")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| Store::default_path());

    let result = async {
        let store = Store::open(&db_path).await?;
        match command {
            Commands::Status => commands::status::run(&store).await,
            Commands::List { limit } => commands::list::run(&store, limit).await,
            Commands::Search { query, limit } => commands::search::run(&store, &query, limit).await,
            Commands::Types => commands::types::run(&store).await,
        }
    }
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(MemlensError::CollectionNotFound { name, source }) => {
            println!("❌ Collection '{}' not found", name);
            println!("   Error: {}", source);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
