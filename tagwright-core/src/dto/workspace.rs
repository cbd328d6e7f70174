//! Workspace envelopes

use serde::Deserialize;

use crate::domain::workspace::Workspace;

/// Envelope of the workspace list endpoint
///
/// The field is omitted entirely when the container has no workspaces.
#[derive(Debug, Clone, Deserialize)]
pub struct ListWorkspacesResponse {
    #[serde(default, rename = "workspace")]
    pub workspaces: Vec<Workspace>,
}
