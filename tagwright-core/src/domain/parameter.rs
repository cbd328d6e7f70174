//! Tag parameter types
//!
//! Tags carry an ordered list of typed parameters. `map` and `list`
//! parameters nest further parameters; everything else is a keyed scalar.
//! The wire format distinguishes an explicit empty collection from an
//! omitted one, so the nested fields stay `Option<Vec<_>>`.

use serde::{Deserialize, Serialize};

/// Parameter value type as the management API enumerates it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterType {
    Template,
    Boolean,
    Integer,
    List,
    Map,
    TagReference,
    TriggerReference,
    /// Parameter types this tool does not model explicitly
    #[serde(untagged)]
    Other(String),
}

/// A single typed tag parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Nested entries of a `map` parameter; `Some(vec![])` serializes as an
    /// explicit empty collection while `None` omits the field entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<Parameter>>,
    /// Nested entries of a `list` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<Parameter>>,
}

impl Parameter {
    /// A `template` parameter holding a literal string value
    pub fn template(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter_type: ParameterType::Template,
            key: Some(key.into()),
            value: Some(value.into()),
            map: None,
            list: None,
        }
    }

    /// A `map` parameter with nested entries
    pub fn map(key: impl Into<String>, entries: Vec<Parameter>) -> Self {
        Self {
            parameter_type: ParameterType::Map,
            key: Some(key.into()),
            value: None,
            map: Some(entries),
            list: None,
        }
    }

    /// A `list` parameter with nested entries
    pub fn list(key: impl Into<String>, entries: Vec<Parameter>) -> Self {
        Self {
            parameter_type: ParameterType::List,
            key: Some(key.into()),
            value: None,
            map: None,
            list: Some(entries),
        }
    }
}
