//! Workspace provisioning
//!
//! Implements the name-keyed upsert flow: triggers are get-or-create, tags
//! are delete-then-recreate. The management API offers no idempotency of its
//! own, so "at most one resource per name" holds only while runs stay
//! sequential; nothing here guards against concurrent edits.

use std::sync::Arc;

use anyhow::{Context, Result};
use tagwright_client::TagManagerApi;
use tagwright_core::domain::find_by_name;
use tagwright_core::domain::scope::{ContainerScope, WorkspaceScope};
use tagwright_core::domain::tag::Tag;
use tagwright_core::domain::trigger::TriggerType;
use tagwright_core::dto::tag::TagBody;
use tagwright_core::dto::trigger::TriggerBody;
use tracing::{debug, info};

use crate::service::builders::{ga4_config_tag_body, ga4_event_tag_body, popup_tag_body};

/// Inputs of one provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionPlan {
    /// GA4 measurement id wired into the config and event tags
    pub measurement_id: String,

    /// Base name for the GA4 config tag and the pop-up tag
    pub config_tag_name: String,

    /// Base name for the GA4 event tag and the pop-up trigger
    pub event_tag_name: String,

    /// Ids of triggers that already exist in the workspace; the GA4 config
    /// tag fires on these ahead of the newly created pop-up trigger
    pub default_trigger_ids: Vec<String>,
}

/// What a provisioning run installed
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    /// The workspace everything was installed into
    pub workspace: WorkspaceScope,
    /// Id of the pop-up trigger (created or reused)
    pub trigger_id: String,
    /// The installed pop-up tag
    pub popup_tag: Tag,
    /// The installed GA4 config tag
    pub config_tag: Tag,
    /// The installed GA4 event tag
    pub event_tag: Tag,
}

/// Installs named tags and triggers into a workspace, idempotently
pub struct Provisioner {
    api: Arc<dyn TagManagerApi>,
}

impl Provisioner {
    /// Creates a provisioner over an API handle
    pub fn new(api: Arc<dyn TagManagerApi>) -> Self {
        Self { api }
    }

    /// Resolve the workspace a run operates on: the first one the API
    /// returns for the container
    ///
    /// # Errors
    /// Fails when the container has no workspaces.
    pub async fn resolve_first_workspace(
        &self,
        scope: &ContainerScope,
    ) -> Result<WorkspaceScope> {
        let workspaces = self
            .api
            .list_workspaces(scope)
            .await
            .context("Failed to list workspaces")?;

        let first = workspaces
            .first()
            .with_context(|| format!("No workspace found for container {}", scope.parent()))?;

        debug!(
            "Resolved workspace {} for {}",
            first.workspace_id,
            scope.parent()
        );

        Ok(scope.workspace(first.workspace_id.clone()))
    }

    /// Return the id of the trigger named `name`, creating it when absent
    ///
    /// An existing trigger is reused as-is; its type is not reconciled
    /// against `trigger_type`.
    pub async fn get_or_create_trigger(
        &self,
        scope: &WorkspaceScope,
        name: &str,
        trigger_type: TriggerType,
    ) -> Result<String> {
        let triggers = self
            .api
            .list_triggers(scope)
            .await
            .context("Failed to list triggers")?;

        if let Some(id) = find_by_name(&triggers, name) {
            info!("Trigger '{}' already exists (id {})", name, id);
            return Ok(id.to_string());
        }

        let body = TriggerBody {
            name: name.to_string(),
            trigger_type,
        };

        let created = self
            .api
            .create_trigger(scope, &body)
            .await
            .with_context(|| format!("Failed to create trigger '{}'", name))?;

        info!(
            "Created trigger '{}' (id {})",
            created.name, created.trigger_id
        );

        Ok(created.trigger_id)
    }

    /// Install `body` under its name, replacing any same-named tag
    ///
    /// Replacement is delete-then-create. The two remote calls are not
    /// atomic: a failure between them leaves the name absent until the next
    /// run recreates it.
    pub async fn upsert_tag(&self, scope: &WorkspaceScope, body: TagBody) -> Result<Tag> {
        let tags = self
            .api
            .list_tags(scope)
            .await
            .context("Failed to list tags")?;

        if let Some(existing_id) = find_by_name(&tags, &body.name) {
            info!(
                "Tag '{}' already exists (id {}), replacing it",
                body.name, existing_id
            );
            self.api
                .delete_tag(scope, existing_id)
                .await
                .with_context(|| format!("Failed to delete tag '{}'", body.name))?;
        }

        let created = self
            .api
            .create_tag(scope, &body)
            .await
            .with_context(|| format!("Failed to create tag '{}'", body.name))?;

        info!("Created tag '{}' (id {})", created.name, created.tag_id);

        Ok(created)
    }

    /// Run the full provisioning sequence against the container's first
    /// workspace
    ///
    /// The order is fixed: pop-up trigger, pop-up tag, GA4 config tag
    /// (firing on the default triggers plus the pop-up trigger), GA4 event
    /// tag. Re-running converges on the same set of names.
    pub async fn run(
        &self,
        scope: &ContainerScope,
        plan: &ProvisionPlan,
    ) -> Result<ProvisionOutcome> {
        let workspace = self.resolve_first_workspace(scope).await?;

        let trigger_id = self
            .get_or_create_trigger(
                &workspace,
                &popup_trigger_name(&plan.event_tag_name),
                TriggerType::Pageview,
            )
            .await?;

        let popup_tag = self
            .upsert_tag(
                &workspace,
                popup_tag_body(popup_tag_name(&plan.config_tag_name), trigger_id.clone()),
            )
            .await?;

        let mut firing_trigger_ids = plan.default_trigger_ids.clone();
        firing_trigger_ids.push(trigger_id.clone());

        let config_tag = self
            .upsert_tag(
                &workspace,
                ga4_config_tag_body(
                    ga4_config_tag_name(&plan.config_tag_name),
                    plan.measurement_id.clone(),
                    firing_trigger_ids,
                ),
            )
            .await?;

        let event_tag = self
            .upsert_tag(
                &workspace,
                ga4_event_tag_body(
                    ga4_event_tag_name(&plan.event_tag_name),
                    plan.measurement_id.clone(),
                ),
            )
            .await?;

        info!(
            "Provisioning complete in workspace {}",
            workspace.workspace_id
        );

        Ok(ProvisionOutcome {
            workspace,
            trigger_id,
            popup_tag,
            config_tag,
            event_tag,
        })
    }
}

/// Name of the pop-up trigger derived from the event tag base name
fn popup_trigger_name(event_tag_name: &str) -> String {
    format!("{} Pop-up Trigger", event_tag_name)
}

/// Name of the pop-up tag derived from the config tag base name
fn popup_tag_name(config_tag_name: &str) -> String {
    format!("{} Pop-up Tag", config_tag_name)
}

/// Name of the GA4 config tag derived from its base name
fn ga4_config_tag_name(config_tag_name: &str) -> String {
    format!("{} - Google Tag", config_tag_name)
}

/// Name of the GA4 event tag derived from its base name
fn ga4_event_tag_name(event_tag_name: &str) -> String {
    format!("{} - GA4 - Tag", event_tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use tagwright_client::ClientError;
    use tagwright_core::domain::tag::TagType;
    use tagwright_core::domain::trigger::Trigger;
    use tagwright_core::domain::workspace::Workspace;

    /// In-memory stand-in for the management API with call accounting
    #[derive(Default)]
    struct InMemoryTagManager {
        state: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        workspaces: Vec<Workspace>,
        tags: Vec<Tag>,
        triggers: Vec<Trigger>,
        next_id: u64,
        created_tags: usize,
        created_triggers: usize,
        deleted_tags: usize,
    }

    impl InMemoryTagManager {
        fn with_workspace(workspace_id: &str) -> Self {
            let fake = Self::default();
            {
                let mut state = fake.state.lock().unwrap();
                state.workspaces.push(Workspace {
                    workspace_id: workspace_id.to_string(),
                    name: "Default Workspace".to_string(),
                    description: None,
                });
                state.next_id = 100;
            }
            fake
        }

        fn add_workspace(&self, workspace_id: &str, name: &str) {
            self.state.lock().unwrap().workspaces.push(Workspace {
                workspace_id: workspace_id.to_string(),
                name: name.to_string(),
                description: None,
            });
        }

        fn add_trigger(&self, trigger_id: &str, name: &str, trigger_type: TriggerType) {
            self.state.lock().unwrap().triggers.push(Trigger {
                trigger_id: trigger_id.to_string(),
                name: name.to_string(),
                trigger_type,
            });
        }

        fn tags(&self) -> Vec<Tag> {
            self.state.lock().unwrap().tags.clone()
        }

        fn triggers(&self) -> Vec<Trigger> {
            self.state.lock().unwrap().triggers.clone()
        }

        fn created_tags(&self) -> usize {
            self.state.lock().unwrap().created_tags
        }

        fn created_triggers(&self) -> usize {
            self.state.lock().unwrap().created_triggers
        }

        fn deleted_tags(&self) -> usize {
            self.state.lock().unwrap().deleted_tags
        }

        fn fresh_id(state: &mut State) -> String {
            state.next_id += 1;
            state.next_id.to_string()
        }
    }

    #[async_trait]
    impl TagManagerApi for InMemoryTagManager {
        async fn list_workspaces(
            &self,
            _scope: &ContainerScope,
        ) -> tagwright_client::Result<Vec<Workspace>> {
            Ok(self.state.lock().unwrap().workspaces.clone())
        }

        async fn list_tags(&self, _scope: &WorkspaceScope) -> tagwright_client::Result<Vec<Tag>> {
            Ok(self.state.lock().unwrap().tags.clone())
        }

        async fn create_tag(
            &self,
            _scope: &WorkspaceScope,
            body: &TagBody,
        ) -> tagwright_client::Result<Tag> {
            let mut state = self.state.lock().unwrap();
            let tag = Tag {
                tag_id: Self::fresh_id(&mut state),
                name: body.name.clone(),
                tag_type: body.tag_type.clone(),
                parameter: body.parameter.clone(),
                firing_trigger_id: body.firing_trigger_id.clone(),
            };
            state.tags.push(tag.clone());
            state.created_tags += 1;
            Ok(tag)
        }

        async fn delete_tag(
            &self,
            _scope: &WorkspaceScope,
            tag_id: &str,
        ) -> tagwright_client::Result<()> {
            let mut state = self.state.lock().unwrap();
            let before = state.tags.len();
            state.tags.retain(|tag| tag.tag_id != tag_id);
            if state.tags.len() == before {
                return Err(ClientError::api_error(
                    404,
                    format!("tag {} not found", tag_id),
                ));
            }
            state.deleted_tags += 1;
            Ok(())
        }

        async fn list_triggers(
            &self,
            _scope: &WorkspaceScope,
        ) -> tagwright_client::Result<Vec<Trigger>> {
            Ok(self.state.lock().unwrap().triggers.clone())
        }

        async fn create_trigger(
            &self,
            _scope: &WorkspaceScope,
            body: &TriggerBody,
        ) -> tagwright_client::Result<Trigger> {
            let mut state = self.state.lock().unwrap();
            let trigger = Trigger {
                trigger_id: Self::fresh_id(&mut state),
                name: body.name.clone(),
                trigger_type: body.trigger_type.clone(),
            };
            state.triggers.push(trigger.clone());
            state.created_triggers += 1;
            Ok(trigger)
        }
    }

    fn plan() -> ProvisionPlan {
        ProvisionPlan {
            measurement_id: "G-TEST12345".to_string(),
            config_tag_name: "Acme Site".to_string(),
            event_tag_name: "Newsletter Signup".to_string(),
            default_trigger_ids: vec!["11".to_string(), "12".to_string(), "13".to_string()],
        }
    }

    fn scope() -> ContainerScope {
        ContainerScope::new("6002", "32871")
    }

    #[tokio::test]
    async fn test_resolve_first_workspace_takes_the_first_entry() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        fake.add_workspace("57", "Experiments");
        let provisioner = Provisioner::new(fake);

        let workspace = provisioner.resolve_first_workspace(&scope()).await.unwrap();

        assert_eq!(workspace.workspace_id, "42");
        assert_eq!(workspace.account_id, "6002");
        assert_eq!(workspace.container_id, "32871");
    }

    #[tokio::test]
    async fn test_resolve_first_workspace_fails_without_workspaces() {
        let fake = Arc::new(InMemoryTagManager::default());
        let provisioner = Provisioner::new(fake);

        let error = provisioner
            .resolve_first_workspace(&scope())
            .await
            .unwrap_err();

        assert!(error.to_string().contains("No workspace found"));
    }

    #[tokio::test]
    async fn test_get_or_create_trigger_creates_once() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        let provisioner = Provisioner::new(fake.clone());
        let workspace = scope().workspace("42");

        let first = provisioner
            .get_or_create_trigger(&workspace, "Signup Pop-up Trigger", TriggerType::Pageview)
            .await
            .unwrap();
        let second = provisioner
            .get_or_create_trigger(&workspace, "Signup Pop-up Trigger", TriggerType::Pageview)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(fake.created_triggers(), 1);
        assert_eq!(fake.triggers().len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_trigger_reuses_regardless_of_type() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        fake.add_trigger("7", "Signup Pop-up Trigger", TriggerType::CustomEvent);
        let provisioner = Provisioner::new(fake.clone());
        let workspace = scope().workspace("42");

        let id = provisioner
            .get_or_create_trigger(&workspace, "Signup Pop-up Trigger", TriggerType::Pageview)
            .await
            .unwrap();

        assert_eq!(id, "7");
        assert_eq!(fake.created_triggers(), 0);
        assert_eq!(fake.triggers()[0].trigger_type, TriggerType::CustomEvent);
    }

    #[tokio::test]
    async fn test_upsert_tag_creates_when_absent() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        let provisioner = Provisioner::new(fake.clone());
        let workspace = scope().workspace("42");

        let tag = provisioner
            .upsert_tag(&workspace, popup_tag_body("Acme Site Pop-up Tag", "9"))
            .await
            .unwrap();

        assert_eq!(tag.name, "Acme Site Pop-up Tag");
        assert_eq!(fake.created_tags(), 1);
        assert_eq!(fake.deleted_tags(), 0);
    }

    #[tokio::test]
    async fn test_upsert_tag_replaces_the_same_named_tag() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        let provisioner = Provisioner::new(fake.clone());
        let workspace = scope().workspace("42");

        let original = provisioner
            .upsert_tag(&workspace, popup_tag_body("Acme Site Pop-up Tag", "9"))
            .await
            .unwrap();
        let replacement = provisioner
            .upsert_tag(&workspace, popup_tag_body("Acme Site Pop-up Tag", "21"))
            .await
            .unwrap();

        assert_ne!(original.tag_id, replacement.tag_id);
        assert_eq!(fake.deleted_tags(), 1);

        let tags = fake.tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].firing_trigger_id, vec!["21".to_string()]);
    }

    #[tokio::test]
    async fn test_run_installs_trigger_and_three_tags() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        let provisioner = Provisioner::new(fake.clone());

        let outcome = provisioner.run(&scope(), &plan()).await.unwrap();

        assert_eq!(outcome.workspace.workspace_id, "42");

        let triggers = fake.triggers();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].name, "Newsletter Signup Pop-up Trigger");
        assert_eq!(triggers[0].trigger_type, TriggerType::Pageview);
        assert_eq!(outcome.trigger_id, triggers[0].trigger_id);

        let tags = fake.tags();
        assert_eq!(tags.len(), 3);

        assert_eq!(outcome.popup_tag.name, "Acme Site Pop-up Tag");
        assert_eq!(outcome.popup_tag.tag_type, TagType::Html);
        assert_eq!(
            outcome.popup_tag.firing_trigger_id,
            vec![outcome.trigger_id.clone()]
        );

        assert_eq!(outcome.config_tag.name, "Acme Site - Google Tag");
        assert_eq!(outcome.config_tag.tag_type, TagType::Gaawc);
        assert_eq!(
            outcome.config_tag.firing_trigger_id,
            vec![
                "11".to_string(),
                "12".to_string(),
                "13".to_string(),
                outcome.trigger_id.clone()
            ]
        );

        assert_eq!(outcome.event_tag.name, "Newsletter Signup - GA4 - Tag");
        assert_eq!(outcome.event_tag.tag_type, TagType::Gaawe);
        assert!(outcome.event_tag.firing_trigger_id.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_recreates_tags_but_not_the_trigger() {
        let fake = Arc::new(InMemoryTagManager::with_workspace("42"));
        let provisioner = Provisioner::new(fake.clone());

        let first = provisioner.run(&scope(), &plan()).await.unwrap();
        let second = provisioner.run(&scope(), &plan()).await.unwrap();

        assert_eq!(first.trigger_id, second.trigger_id);
        assert_eq!(fake.created_triggers(), 1);

        assert_eq!(fake.created_tags(), 6);
        assert_eq!(fake.deleted_tags(), 3);

        let tags = fake.tags();
        assert_eq!(tags.len(), 3);

        let mut names: Vec<_> = tags.iter().map(|tag| tag.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "Acme Site - Google Tag",
                "Acme Site Pop-up Tag",
                "Newsletter Signup - GA4 - Tag"
            ]
        );

        assert_eq!(
            second.config_tag.firing_trigger_id,
            vec![
                "11".to_string(),
                "12".to_string(),
                "13".to_string(),
                first.trigger_id.clone()
            ]
        );
        assert!(second.event_tag.firing_trigger_id.is_empty());
    }
}
