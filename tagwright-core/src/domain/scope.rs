//! Scope paths
//!
//! The management API addresses every resource beneath an
//! account/container/workspace hierarchy. These types carry the ids and
//! render the `parent` path segments the v2 endpoints expect.

/// An account/container pair
///
/// Container-level collections (workspaces) hang directly off this scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerScope {
    pub account_id: String,
    pub container_id: String,
}

impl ContainerScope {
    /// Create a scope for a container
    pub fn new(account_id: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            container_id: container_id.into(),
        }
    }

    /// The `parent` path segment for container-level endpoints
    pub fn parent(&self) -> String {
        format!(
            "accounts/{}/containers/{}",
            self.account_id, self.container_id
        )
    }

    /// Narrow this scope to a specific workspace
    pub fn workspace(&self, workspace_id: impl Into<String>) -> WorkspaceScope {
        WorkspaceScope {
            account_id: self.account_id.clone(),
            container_id: self.container_id.clone(),
            workspace_id: workspace_id.into(),
        }
    }
}

/// A workspace within a container
///
/// Tags and triggers live at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceScope {
    pub account_id: String,
    pub container_id: String,
    pub workspace_id: String,
}

impl WorkspaceScope {
    /// Create a scope for a workspace
    pub fn new(
        account_id: impl Into<String>,
        container_id: impl Into<String>,
        workspace_id: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            container_id: container_id.into(),
            workspace_id: workspace_id.into(),
        }
    }

    /// The `parent` path segment for workspace-level endpoints
    pub fn parent(&self) -> String {
        format!(
            "accounts/{}/containers/{}/workspaces/{}",
            self.account_id, self.container_id, self.workspace_id
        )
    }
}
