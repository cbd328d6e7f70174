//! Trigger domain types

use serde::{Deserialize, Serialize};

use crate::domain::NamedResource;

/// A trigger as stored in a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    /// Server-assigned id, unique within the container
    pub trigger_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
}

/// Trigger type identifier
///
/// Unknown identifiers are carried through verbatim, same as [`TagType`].
///
/// [`TagType`]: crate::domain::tag::TagType
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerType {
    Pageview,
    DomReady,
    WindowLoaded,
    CustomEvent,
    Click,
    #[serde(untagged)]
    Other(String),
}

impl TriggerType {
    /// The wire identifier for this type
    pub fn as_str(&self) -> &str {
        match self {
            TriggerType::Pageview => "pageview",
            TriggerType::DomReady => "domReady",
            TriggerType::WindowLoaded => "windowLoaded",
            TriggerType::CustomEvent => "customEvent",
            TriggerType::Click => "click",
            TriggerType::Other(other) => other,
        }
    }
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NamedResource for Trigger {
    fn id(&self) -> &str {
        &self.trigger_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
