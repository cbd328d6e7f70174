//! Tag-related API endpoints

use crate::TagManagerClient;
use crate::error::Result;
use tagwright_core::domain::scope::WorkspaceScope;
use tagwright_core::domain::tag::Tag;
use tagwright_core::dto::tag::{ListTagsResponse, TagBody};

impl TagManagerClient {
    // =============================================================================
    // Tags
    // =============================================================================

    /// List all tags in a workspace
    ///
    /// # Arguments
    /// * `scope` - The workspace to list
    ///
    /// # Returns
    /// Every tag in the workspace; empty when it has none
    pub async fn list_tags(&self, scope: &WorkspaceScope) -> Result<Vec<Tag>> {
        let url = format!("{}/{}/tags", self.base_url, scope.parent());
        let response = self.get(&url).send().await?;

        let envelope: ListTagsResponse = self.handle_response(response).await?;
        Ok(envelope.tags)
    }

    /// Create a tag
    ///
    /// # Arguments
    /// * `scope` - The workspace to create in
    /// * `body` - The tag definition
    ///
    /// # Returns
    /// The stored tag, with its server-assigned id
    pub async fn create_tag(&self, scope: &WorkspaceScope, body: &TagBody) -> Result<Tag> {
        let url = format!("{}/{}/tags", self.base_url, scope.parent());
        let response = self.post(&url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Update a tag in place
    ///
    /// The provisioning flow does not call this; it replaces tags wholesale
    /// via [`delete_tag`](Self::delete_tag) and [`create_tag`](Self::create_tag).
    ///
    /// # Arguments
    /// * `scope` - The workspace the tag lives in
    /// * `tag_id` - The tag to update
    /// * `body` - The full replacement definition
    ///
    /// # Returns
    /// The stored tag after the update
    pub async fn update_tag(
        &self,
        scope: &WorkspaceScope,
        tag_id: &str,
        body: &TagBody,
    ) -> Result<Tag> {
        let url = format!("{}/{}/tags/{}", self.base_url, scope.parent(), tag_id);
        let response = self.put(&url).json(body).send().await?;

        self.handle_response(response).await
    }

    /// Delete a tag
    ///
    /// # Arguments
    /// * `scope` - The workspace the tag lives in
    /// * `tag_id` - The tag to delete
    pub async fn delete_tag(&self, scope: &WorkspaceScope, tag_id: &str) -> Result<()> {
        let url = format!("{}/{}/tags/{}", self.base_url, scope.parent(), tag_id);
        let response = self.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
