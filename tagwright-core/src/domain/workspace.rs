//! Workspace domain types

use serde::{Deserialize, Serialize};

/// A container workspace
///
/// Only the fields the provisioning flow reads; the API returns more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Server-assigned id, unique within the container
    pub workspace_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_list_entry() {
        let workspace: Workspace = serde_json::from_value(json!({
            "accountId": "6002",
            "containerId": "32871",
            "workspaceId": "42",
            "name": "Default Workspace",
            "description": "Primary editing surface"
        }))
        .unwrap();

        assert_eq!(workspace.workspace_id, "42");
        assert_eq!(workspace.name, "Default Workspace");
        assert_eq!(
            workspace.description.as_deref(),
            Some("Primary editing surface")
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let workspace: Workspace =
            serde_json::from_value(json!({"workspaceId": "42"})).unwrap();

        assert_eq!(workspace.workspace_id, "42");
        assert!(workspace.name.is_empty());
        assert!(workspace.description.is_none());
    }
}
