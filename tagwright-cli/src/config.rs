//! Provisioning configuration
//!
//! Defines the inputs of a provisioning run in one place: credentials, the
//! target container, and the names of the resources to install. Every value
//! arrives through CLI flags or environment variables; nothing is hardcoded.

use std::path::PathBuf;

use tagwright_core::domain::scope::ContainerScope;

/// Configuration for one provisioning run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service-account key JSON file
    pub service_credential_path: PathBuf,

    /// Tag Manager account id
    pub account_id: String,

    /// Tag Manager container id
    pub container_id: String,

    /// GA4 measurement id wired into the config and event tags (e.g. "G-ABC123DEF4")
    pub measurement_id: String,

    /// Base name for the GA4 config tag and the pop-up tag
    pub config_tag_name: String,

    /// Base name for the GA4 event tag and the pop-up trigger
    pub event_tag_name: String,

    /// Ids of triggers that already exist in the workspace; the GA4 config
    /// tag keeps firing on these ahead of the newly created pop-up trigger
    pub default_trigger_ids: Vec<String>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.service_credential_path.as_os_str().is_empty() {
            anyhow::bail!("credentials path cannot be empty");
        }

        if self.account_id.is_empty() {
            anyhow::bail!("account_id cannot be empty");
        }

        if self.container_id.is_empty() {
            anyhow::bail!("container_id cannot be empty");
        }

        if self.measurement_id.is_empty() {
            anyhow::bail!("measurement_id cannot be empty");
        }

        if self.config_tag_name.trim().is_empty() {
            anyhow::bail!("config_tag_name cannot be empty");
        }

        if self.event_tag_name.trim().is_empty() {
            anyhow::bail!("event_tag_name cannot be empty");
        }

        if self.default_trigger_ids.iter().any(|id| id.is_empty()) {
            anyhow::bail!("default trigger ids cannot contain empty entries");
        }

        Ok(())
    }

    /// The container this run targets
    pub fn container_scope(&self) -> ContainerScope {
        ContainerScope::new(self.account_id.clone(), self.container_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            service_credential_path: PathBuf::from("service-account.json"),
            account_id: "6002".to_string(),
            container_id: "32871".to_string(),
            measurement_id: "G-ABC123DEF4".to_string(),
            config_tag_name: "Acme Site".to_string(),
            event_tag_name: "Newsletter Signup".to_string(),
            default_trigger_ids: vec!["11".to_string(), "12".to_string()],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_account_id_rejected() {
        let mut config = sample();
        config.account_id = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_measurement_id_rejected() {
        let mut config = sample();
        config.measurement_id = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_tag_names_rejected() {
        let mut config = sample();
        config.config_tag_name = "   ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_default_triggers_is_valid() {
        let mut config = sample();
        config.default_trigger_ids.clear();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_default_trigger_entry_rejected() {
        let mut config = sample();
        config.default_trigger_ids.push(String::new());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_container_scope_carries_ids() {
        let scope = sample().container_scope();

        assert_eq!(scope.parent(), "accounts/6002/containers/32871");
    }
}
