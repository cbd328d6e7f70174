//! Tag domain types

use serde::{Deserialize, Serialize};

use crate::domain::NamedResource;
use crate::domain::parameter::Parameter;

/// A tag as stored in a workspace
///
/// Field names follow the v2 wire format (camelCase on the wire). The list
/// endpoint omits `parameter` and `firingTriggerId` when they are empty, so
/// both default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Server-assigned id, unique within the container
    pub tag_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    #[serde(default)]
    pub parameter: Vec<Parameter>,
    /// Ids of the triggers this tag fires on
    #[serde(default)]
    pub firing_trigger_id: Vec<String>,
}

/// Tag template type identifier
///
/// The platform ships far more templates than the ones this tool installs;
/// unknown identifiers are carried through verbatim so listing a workspace
/// never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    /// Custom HTML
    Html,
    /// GA4 event
    Gaawe,
    /// GA4 configuration ("Google tag")
    Gaawc,
    #[serde(untagged)]
    Other(String),
}

impl TagType {
    /// The wire identifier for this type
    pub fn as_str(&self) -> &str {
        match self {
            TagType::Html => "html",
            TagType::Gaawe => "gaawe",
            TagType::Gaawc => "gaawc",
            TagType::Other(other) => other,
        }
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NamedResource for Tag {
    fn id(&self) -> &str {
        &self.tag_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_list_entry() {
        let tag: Tag = serde_json::from_value(json!({
            "accountId": "6002",
            "containerId": "32871",
            "workspaceId": "42",
            "tagId": "15",
            "name": "Acme Pop-up Tag",
            "type": "html",
            "parameter": [
                {"type": "template", "key": "html", "value": "<div></div>"}
            ],
            "firingTriggerId": ["9"]
        }))
        .unwrap();

        assert_eq!(tag.tag_id, "15");
        assert_eq!(tag.name, "Acme Pop-up Tag");
        assert_eq!(tag.tag_type, TagType::Html);
        assert_eq!(tag.firing_trigger_id, vec!["9".to_string()]);
    }

    #[test]
    fn test_omitted_collections_default_empty() {
        let tag: Tag = serde_json::from_value(json!({
            "tagId": "3",
            "name": "Paused Tag",
            "type": "gaawc"
        }))
        .unwrap();

        assert!(tag.parameter.is_empty());
        assert!(tag.firing_trigger_id.is_empty());
    }

    #[test]
    fn test_unknown_tag_type_is_preserved() {
        let tag: Tag = serde_json::from_value(json!({
            "tagId": "8",
            "name": "Community Template",
            "type": "cvt_123456_78"
        }))
        .unwrap();

        assert_eq!(tag.tag_type, TagType::Other("cvt_123456_78".to_string()));
        assert_eq!(tag.tag_type.as_str(), "cvt_123456_78");
    }
}
