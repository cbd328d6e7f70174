//! Provision command handler
//!
//! Runs the full provisioning sequence against the container's first
//! workspace and reports what was installed.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use colored::*;
use tagwright_core::domain::scope::ContainerScope;

use super::connect;
use crate::config::Config;
use crate::service::{ProvisionOutcome, ProvisionPlan, Provisioner};

/// Arguments for the provision command
#[derive(Args)]
pub struct ProvisionArgs {
    /// GA4 measurement id (e.g. G-ABC123DEF4)
    #[arg(long, env = "TAGWRIGHT_MEASUREMENT_ID")]
    measurement_id: String,

    /// Base name for the GA4 config tag and the pop-up tag
    #[arg(long)]
    config_tag_name: String,

    /// Base name for the GA4 event tag and the pop-up trigger
    #[arg(long)]
    event_tag_name: String,

    /// Existing trigger ids the GA4 config tag keeps firing on (comma-separated)
    #[arg(long, value_delimiter = ',')]
    default_trigger_ids: Vec<String>,
}

/// Handle the provision command
///
/// # Arguments
/// * `args` - The provision arguments
/// * `credentials` - Path to the service-account key file
/// * `scope` - The container to provision
pub async fn handle_provision(
    args: ProvisionArgs,
    credentials: &Path,
    scope: &ContainerScope,
) -> Result<()> {
    let config = Config {
        service_credential_path: credentials.to_path_buf(),
        account_id: scope.account_id.clone(),
        container_id: scope.container_id.clone(),
        measurement_id: args.measurement_id,
        config_tag_name: args.config_tag_name,
        event_tag_name: args.event_tag_name,
        default_trigger_ids: args.default_trigger_ids,
    };
    config.validate()?;

    let api = connect(&config.service_credential_path).await?;
    let provisioner = Provisioner::new(api);

    let plan = ProvisionPlan {
        measurement_id: config.measurement_id.clone(),
        config_tag_name: config.config_tag_name.clone(),
        event_tag_name: config.event_tag_name.clone(),
        default_trigger_ids: config.default_trigger_ids.clone(),
    };

    let outcome = provisioner.run(&config.container_scope(), &plan).await?;

    print_outcome(&outcome);

    Ok(())
}

/// Print what a provisioning run installed
fn print_outcome(outcome: &ProvisionOutcome) {
    println!("{}", "✓ Provisioning complete!".green().bold());
    println!("  Workspace:   {}", outcome.workspace.workspace_id.cyan());
    println!("  Trigger:     {}", outcome.trigger_id.cyan());
    println!(
        "  Pop-up tag:  {} (id {})",
        outcome.popup_tag.name.bold(),
        outcome.popup_tag.tag_id.dimmed()
    );
    println!(
        "  Google tag:  {} (id {})",
        outcome.config_tag.name.bold(),
        outcome.config_tag.tag_id.dimmed()
    );
    println!(
        "  Event tag:   {} (id {})",
        outcome.event_tag.name.bold(),
        outcome.event_tag.tag_id.dimmed()
    );
}
