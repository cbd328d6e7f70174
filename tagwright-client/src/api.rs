//! Capability surface of the management API
//!
//! The provisioning flow depends on this trait rather than on
//! [`TagManagerClient`] directly, so tests can substitute an in-memory
//! implementation. The trait carries exactly the calls the flow performs;
//! update and pagination stay off it.

use async_trait::async_trait;
use tagwright_core::domain::scope::{ContainerScope, WorkspaceScope};
use tagwright_core::domain::tag::Tag;
use tagwright_core::domain::trigger::Trigger;
use tagwright_core::domain::workspace::Workspace;
use tagwright_core::dto::tag::TagBody;
use tagwright_core::dto::trigger::TriggerBody;

use crate::TagManagerClient;
use crate::error::Result;

/// Operations the provisioning flow performs against a container
#[async_trait]
pub trait TagManagerApi: Send + Sync {
    /// List the workspaces of a container
    async fn list_workspaces(&self, scope: &ContainerScope) -> Result<Vec<Workspace>>;

    /// List all tags in a workspace
    async fn list_tags(&self, scope: &WorkspaceScope) -> Result<Vec<Tag>>;

    /// Create a tag from `body`
    ///
    /// # Returns
    /// The stored tag, with its server-assigned id
    async fn create_tag(&self, scope: &WorkspaceScope, body: &TagBody) -> Result<Tag>;

    /// Delete the tag with id `tag_id`
    async fn delete_tag(&self, scope: &WorkspaceScope, tag_id: &str) -> Result<()>;

    /// List all triggers in a workspace
    async fn list_triggers(&self, scope: &WorkspaceScope) -> Result<Vec<Trigger>>;

    /// Create a trigger from `body`
    ///
    /// # Returns
    /// The stored trigger, with its server-assigned id
    async fn create_trigger(&self, scope: &WorkspaceScope, body: &TriggerBody) -> Result<Trigger>;
}

#[async_trait]
impl TagManagerApi for TagManagerClient {
    async fn list_workspaces(&self, scope: &ContainerScope) -> Result<Vec<Workspace>> {
        TagManagerClient::list_workspaces(self, scope).await
    }

    async fn list_tags(&self, scope: &WorkspaceScope) -> Result<Vec<Tag>> {
        TagManagerClient::list_tags(self, scope).await
    }

    async fn create_tag(&self, scope: &WorkspaceScope, body: &TagBody) -> Result<Tag> {
        TagManagerClient::create_tag(self, scope, body).await
    }

    async fn delete_tag(&self, scope: &WorkspaceScope, tag_id: &str) -> Result<()> {
        TagManagerClient::delete_tag(self, scope, tag_id).await
    }

    async fn list_triggers(&self, scope: &WorkspaceScope) -> Result<Vec<Trigger>> {
        TagManagerClient::list_triggers(self, scope).await
    }

    async fn create_trigger(&self, scope: &WorkspaceScope, body: &TriggerBody) -> Result<Trigger> {
        TagManagerClient::create_trigger(self, scope, body).await
    }
}
