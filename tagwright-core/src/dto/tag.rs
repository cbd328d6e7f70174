//! Tag payloads and envelopes

use serde::{Deserialize, Serialize};

use crate::domain::parameter::Parameter;
use crate::domain::tag::{Tag, TagType};

/// Payload for creating or updating a tag
///
/// An empty `firing_trigger_id` still serializes as an explicit `[]`; a tag
/// posted without triggers must carry the empty array rather than omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBody {
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    #[serde(default)]
    pub parameter: Vec<Parameter>,
    #[serde(default)]
    pub firing_trigger_id: Vec<String>,
}

/// Envelope of the tag list endpoint
///
/// The field is omitted entirely when the workspace has no tags.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTagsResponse {
    #[serde(default, rename = "tag")]
    pub tags: Vec<Tag>,
}
