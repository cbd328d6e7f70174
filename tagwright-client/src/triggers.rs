//! Trigger-related API endpoints

use crate::TagManagerClient;
use crate::error::Result;
use tagwright_core::domain::scope::WorkspaceScope;
use tagwright_core::domain::trigger::Trigger;
use tagwright_core::dto::trigger::{ListTriggersResponse, TriggerBody};

impl TagManagerClient {
    // =============================================================================
    // Triggers
    // =============================================================================

    /// List all triggers in a workspace
    ///
    /// # Arguments
    /// * `scope` - The workspace to list
    ///
    /// # Returns
    /// Every trigger in the workspace; empty when it has none
    pub async fn list_triggers(&self, scope: &WorkspaceScope) -> Result<Vec<Trigger>> {
        let url = format!("{}/{}/triggers", self.base_url, scope.parent());
        let response = self.get(&url).send().await?;

        let envelope: ListTriggersResponse = self.handle_response(response).await?;
        Ok(envelope.triggers)
    }

    /// Create a trigger
    ///
    /// # Arguments
    /// * `scope` - The workspace to create in
    /// * `body` - The trigger definition
    ///
    /// # Returns
    /// The stored trigger, with its server-assigned id
    pub async fn create_trigger(
        &self,
        scope: &WorkspaceScope,
        body: &TriggerBody,
    ) -> Result<Trigger> {
        let url = format!("{}/{}/triggers", self.base_url, scope.parent());
        let response = self.post(&url).json(body).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tagwright_core::domain::trigger::TriggerType;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scope() -> WorkspaceScope {
        WorkspaceScope::new("6002", "32871", "42")
    }

    #[tokio::test]
    async fn test_list_triggers_unwraps_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/accounts/6002/containers/32871/workspaces/42/triggers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trigger": [
                    {"triggerId": "9", "name": "Signup Pop-up Trigger", "type": "pageview"}
                ]
            })))
            .mount(&server)
            .await;

        let client = TagManagerClient::with_base_url(server.uri(), "test-token");
        let triggers = client.list_triggers(&scope()).await.unwrap();

        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].trigger_id, "9");
        assert_eq!(triggers[0].trigger_type, TriggerType::Pageview);
    }

    #[tokio::test]
    async fn test_create_trigger_posts_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accounts/6002/containers/32871/workspaces/42/triggers"))
            .and(body_partial_json(json!({
                "name": "Signup Pop-up Trigger",
                "type": "pageview"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "triggerId": "9",
                "name": "Signup Pop-up Trigger",
                "type": "pageview"
            })))
            .mount(&server)
            .await;

        let body = TriggerBody {
            name: "Signup Pop-up Trigger".to_string(),
            trigger_type: TriggerType::Pageview,
        };

        let client = TagManagerClient::with_base_url(server.uri(), "test-token");
        let trigger = client.create_trigger(&scope(), &body).await.unwrap();

        assert_eq!(trigger.trigger_id, "9");
        assert_eq!(trigger.name, "Signup Pop-up Trigger");
    }
}
