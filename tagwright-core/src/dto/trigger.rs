//! Trigger payloads and envelopes

use serde::{Deserialize, Serialize};

use crate::domain::trigger::{Trigger, TriggerType};

/// Payload for creating a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerBody {
    pub name: String,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
}

/// Envelope of the trigger list endpoint
///
/// The field is omitted entirely when the workspace has no triggers.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTriggersResponse {
    #[serde(default, rename = "trigger")]
    pub triggers: Vec<Trigger>,
}
