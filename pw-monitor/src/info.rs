//! Info payload of a monitor record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::json_decode::null_as_default;
use crate::common::State;
use crate::params::Params;
use crate::props::PropertyDictionary;

/// Per-event payload describing the object's current (or changed) state
///
/// Which fields are present depends on the interface kind: ports report a
/// `direction`, nodes report port counts and a `state`, links report the
/// ports and nodes they connect. Update events fill in only what changed,
/// listed in `change_mask`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// `input` or `output` (ports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Names of the fields that changed since the previous event for this id
    #[serde(
        rename = "change-mask",
        default,
        deserialize_with = "null_as_default"
    )]
    pub change_mask: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropertyDictionary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,

    /// Error reported by the daemon, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,

    #[serde(rename = "max-input-ports", default, skip_serializing_if = "Option::is_none")]
    pub max_input_ports: Option<i64>,

    #[serde(rename = "max-output-ports", default, skip_serializing_if = "Option::is_none")]
    pub max_output_ports: Option<i64>,

    #[serde(rename = "n-input-ports", default, skip_serializing_if = "Option::is_none")]
    pub n_input_ports: Option<i64>,

    #[serde(rename = "n-output-ports", default, skip_serializing_if = "Option::is_none")]
    pub n_output_ports: Option<i64>,

    #[serde(rename = "output-node-id", default, skip_serializing_if = "Option::is_none")]
    pub output_node_id: Option<i64>,

    #[serde(rename = "output-port-id", default, skip_serializing_if = "Option::is_none")]
    pub output_port_id: Option<i64>,

    #[serde(rename = "input-node-id", default, skip_serializing_if = "Option::is_none")]
    pub input_node_id: Option<i64>,

    #[serde(rename = "input-port-id", default, skip_serializing_if = "Option::is_none")]
    pub input_port_id: Option<i64>,
}

impl Info {
    /// Whether the change mask lists `field` (for example `props` or `state`)
    pub fn has_changed(&self, field: &str) -> bool {
        self.change_mask.iter().any(|changed| changed == field)
    }

    /// The error message, when the daemon reported one as a string
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(Value::as_str)
    }
}
