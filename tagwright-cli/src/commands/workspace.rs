//! Workspace command handlers

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tagwright_client::TagManagerApi;
use tagwright_core::domain::scope::ContainerScope;
use tagwright_core::domain::workspace::Workspace;

use super::connect;

/// Workspace subcommands
#[derive(Subcommand)]
pub enum WorkspaceCommands {
    /// List the workspaces of the container
    List,
}

/// Handle workspace commands
///
/// # Arguments
/// * `command` - The workspace command to execute
/// * `credentials` - Path to the service-account key file
/// * `scope` - The container to inspect
pub async fn handle_workspace_command(
    command: WorkspaceCommands,
    credentials: &Path,
    scope: &ContainerScope,
) -> Result<()> {
    let api = connect(credentials).await?;

    match command {
        WorkspaceCommands::List => {
            let workspaces = api.list_workspaces(scope).await?;

            if workspaces.is_empty() {
                println!("{}", "No workspaces found.".yellow());
            } else {
                println!(
                    "{}",
                    format!("Found {} workspace(s):", workspaces.len()).bold()
                );
                println!();
                for workspace in workspaces {
                    print_workspace_summary(&workspace);
                }
            }

            Ok(())
        }
    }
}

/// Print a workspace summary
fn print_workspace_summary(workspace: &Workspace) {
    println!("  {} {}", "▸".cyan(), workspace.name.bold());
    println!("    ID: {}", workspace.workspace_id.dimmed());
    if let Some(description) = &workspace.description {
        println!("    Description: {}", description.dimmed());
    }
    println!();
}
