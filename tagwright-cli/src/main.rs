//! Tagwright CLI
//!
//! Command-line tool for provisioning Google Tag Manager containers. The
//! provision command installs a pop-up trigger/tag pair and a GA4 tag set
//! into a container's first workspace, keyed by resource name so re-runs
//! converge instead of piling up duplicates.

mod commands;
mod config;
mod service;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use tagwright_core::domain::scope::ContainerScope;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tagwright")]
#[command(about = "Google Tag Manager provisioning CLI", long_about = None)]
struct Cli {
    /// Path to the service-account key JSON file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS", value_name = "FILE")]
    credentials: PathBuf,

    /// Tag Manager account id
    #[arg(long, env = "TAGWRIGHT_ACCOUNT_ID")]
    account_id: String,

    /// Tag Manager container id
    #[arg(long, env = "TAGWRIGHT_CONTAINER_ID")]
    container_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagwright_cli=info,tagwright_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let scope = ContainerScope::new(cli.account_id, cli.container_id);

    handle_command(cli.command, &cli.credentials, &scope).await
}
