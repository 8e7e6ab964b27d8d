//! Parameter blocks attached to an info payload.
//!
//! The daemon groups object parameters by category name. Each category holds
//! an ordered list of records whose shape depends on the category:
//!
//! ```json
//! "params": {
//!   "Meta": [ { "type": "Header", "size": 32 } ],
//!   "Latency": [ { "direction": "Input", "minQuantum": 1.0, ... } ]
//! }
//! ```
//!
//! Absent categories decode to empty lists and categories outside the known
//! set are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::json_decode::null_as_default;

/// Parameter block collection of an info payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(
        rename = "EnumFormat",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enum_format: Vec<EnumFormatParam>,

    #[serde(
        rename = "Meta",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub meta: Vec<MetaParam>,

    #[serde(
        rename = "IO",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub io: Vec<IoParam>,

    /// Negotiated formats, kept as raw JSON
    #[serde(
        rename = "Format",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub format: Vec<Value>,

    /// Buffer requirements, kept as raw JSON
    #[serde(
        rename = "Buffers",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub buffers: Vec<Value>,

    #[serde(
        rename = "Latency",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub latency: Vec<LatencyParam>,

    /// Stream tags, kept as raw JSON
    #[serde(
        rename = "Tag",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag: Vec<Value>,
}

/// A format the object can be configured with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnumFormatParam {
    /// `audio`, `video`, ...
    pub media_type: String,
    /// `raw`, `dsp`, ...
    pub media_subtype: String,
    /// Sample format or a choice of sample formats
    pub format: Value,
}

/// Metadata a buffer can carry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaParam {
    #[serde(rename = "type")]
    pub kind: String,
    pub size: i64,
}

/// An IO area exposed by the object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoParam {
    pub id: String,
    pub size: i64,
}

/// Latency reported for one direction of the object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyParam {
    /// `Input` or `Output`
    pub direction: String,
    pub min_quantum: f64,
    pub max_quantum: f64,
    pub min_rate: i64,
    pub max_rate: i64,
    /// Nanoseconds
    pub min_ns: i64,
    /// Nanoseconds
    pub max_ns: i64,
}

impl Params {
    /// Whether no known category carries any record
    pub fn is_empty(&self) -> bool {
        self.enum_format.is_empty()
            && self.meta.is_empty()
            && self.io.is_empty()
            && self.format.is_empty()
            && self.buffers.is_empty()
            && self.latency.is_empty()
            && self.tag.is_empty()
    }

    /// The latency record for a direction (`Input` or `Output`), if reported
    pub fn latency_for(&self, direction: &str) -> Option<&LatencyParam> {
        self.latency
            .iter()
            .find(|latency| latency.direction.eq_ignore_ascii_case(direction))
    }
}
