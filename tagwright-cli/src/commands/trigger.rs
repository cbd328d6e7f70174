//! Trigger command handlers

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tagwright_client::TagManagerApi;
use tagwright_core::domain::scope::ContainerScope;
use tagwright_core::domain::trigger::Trigger;

use super::connect;
use crate::service::Provisioner;

/// Trigger subcommands
#[derive(Subcommand)]
pub enum TriggerCommands {
    /// List all triggers in the first workspace
    List,
}

/// Handle trigger commands
///
/// # Arguments
/// * `command` - The trigger command to execute
/// * `credentials` - Path to the service-account key file
/// * `scope` - The container to inspect
pub async fn handle_trigger_command(
    command: TriggerCommands,
    credentials: &Path,
    scope: &ContainerScope,
) -> Result<()> {
    let api = connect(credentials).await?;

    match command {
        TriggerCommands::List => list_triggers(api, scope).await,
    }
}

/// List all triggers in the container's first workspace
async fn list_triggers(api: Arc<dyn TagManagerApi>, scope: &ContainerScope) -> Result<()> {
    let workspace = Provisioner::new(api.clone())
        .resolve_first_workspace(scope)
        .await?;

    let triggers = api.list_triggers(&workspace).await?;

    if triggers.is_empty() {
        println!("{}", "No triggers found.".yellow());
    } else {
        println!("{}", format!("Found {} trigger(s):", triggers.len()).bold());
        println!();
        for trigger in triggers {
            print_trigger_summary(&trigger);
        }
    }

    Ok(())
}

/// Print a trigger summary
fn print_trigger_summary(trigger: &Trigger) {
    println!("  {} {}", "▸".cyan(), trigger.name.bold());
    println!("    ID:   {}", trigger.trigger_id.dimmed());
    println!("    Type: {}", trigger.trigger_type.to_string().dimmed());
    println!();
}
