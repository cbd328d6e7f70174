//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod provision;
mod tag;
mod trigger;
mod workspace;

pub use provision::ProvisionArgs;
pub use tag::TagCommands;
pub use trigger::TriggerCommands;
pub use workspace::WorkspaceCommands;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use tagwright_client::{TagManagerApi, TagManagerClient};
use tagwright_core::domain::scope::ContainerScope;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Install the pop-up trigger and GA4 tag set into the first workspace
    Provision(ProvisionArgs),
    /// Tag management
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Trigger management
    Trigger {
        #[command(subcommand)]
        command: TriggerCommands,
    },
    /// Workspace management
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `credentials` - Path to the service-account key file
/// * `scope` - The container every command operates on
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(
    command: Commands,
    credentials: &Path,
    scope: &ContainerScope,
) -> Result<()> {
    match command {
        Commands::Provision(args) => provision::handle_provision(args, credentials, scope).await,
        Commands::Tag { command } => tag::handle_tag_command(command, credentials, scope).await,
        Commands::Trigger { command } => {
            trigger::handle_trigger_command(command, credentials, scope).await
        }
        Commands::Workspace { command } => {
            workspace::handle_workspace_command(command, credentials, scope).await
        }
    }
}

/// Build an authenticated API handle from a service-account key file
async fn connect(credentials: &Path) -> Result<Arc<dyn TagManagerApi>> {
    let client = TagManagerClient::from_service_account(credentials)
        .await
        .with_context(|| format!("Failed to authenticate with {}", credentials.display()))?;

    Ok(Arc::new(client))
}
