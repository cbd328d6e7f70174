//! Tag command handlers

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tagwright_client::TagManagerApi;
use tagwright_core::domain::scope::ContainerScope;
use tagwright_core::domain::tag::Tag;

use super::connect;
use crate::service::Provisioner;

/// Tag subcommands
#[derive(Subcommand)]
pub enum TagCommands {
    /// List all tags in the first workspace
    List,
}

/// Handle tag commands
///
/// # Arguments
/// * `command` - The tag command to execute
/// * `credentials` - Path to the service-account key file
/// * `scope` - The container to inspect
pub async fn handle_tag_command(
    command: TagCommands,
    credentials: &Path,
    scope: &ContainerScope,
) -> Result<()> {
    let api = connect(credentials).await?;

    match command {
        TagCommands::List => list_tags(api, scope).await,
    }
}

/// List all tags in the container's first workspace
async fn list_tags(api: Arc<dyn TagManagerApi>, scope: &ContainerScope) -> Result<()> {
    let workspace = Provisioner::new(api.clone())
        .resolve_first_workspace(scope)
        .await?;

    let tags = api.list_tags(&workspace).await?;

    if tags.is_empty() {
        println!("{}", "No tags found.".yellow());
    } else {
        println!("{}", format!("Found {} tag(s):", tags.len()).bold());
        println!();
        for tag in tags {
            print_tag_summary(&tag);
        }
    }

    Ok(())
}

/// Print a tag summary
fn print_tag_summary(tag: &Tag) {
    println!("  {} {}", "▸".cyan(), tag.name.bold());
    println!("    ID:   {}", tag.tag_id.dimmed());
    println!("    Type: {}", tag.tag_type.to_string().dimmed());
    if !tag.firing_trigger_id.is_empty() {
        println!(
            "    Fires on: {}",
            tag.firing_trigger_id.join(", ").dimmed()
        );
    }
    println!();
}
