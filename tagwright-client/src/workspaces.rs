//! Workspace-related API endpoints

use crate::TagManagerClient;
use crate::error::Result;
use tagwright_core::domain::scope::ContainerScope;
use tagwright_core::domain::workspace::Workspace;
use tagwright_core::dto::workspace::ListWorkspacesResponse;

impl TagManagerClient {
    // =============================================================================
    // Workspaces
    // =============================================================================

    /// List the workspaces of a container
    ///
    /// # Arguments
    /// * `scope` - The container to list
    ///
    /// # Returns
    /// The container's workspaces in API order; empty when it has none
    pub async fn list_workspaces(&self, scope: &ContainerScope) -> Result<Vec<Workspace>> {
        let url = format!("{}/{}/workspaces", self.base_url, scope.parent());
        let response = self.get(&url).send().await?;

        let envelope: ListWorkspacesResponse = self.handle_response(response).await?;
        Ok(envelope.workspaces)
    }
}
