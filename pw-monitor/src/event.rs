//! Envelope of a monitor record and the removal rule.
//!
//! Every record the monitor emits is one JSON object describing one daemon
//! object:
//!
//! ```json
//! {"id": 45, "type": "PipeWire:Interface:Node", "version": 3, "permissions": ["r", "w", "x", "m"], "info": {...}}
//! ```
//!
//! When an object goes away the daemon sends a minimal record with the id and
//! a null payload:
//!
//! ```json
//! {"id": 128, "info": null}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::common::json_decode::{self, null_as_default};
use crate::common::EventType;
use crate::error::{ProjectionError, Result};
use crate::info::Info;
use crate::projection::NodeProps;
use crate::props::PropertyDictionary;

/// One decoded monitor record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Object id, 0 when the record carries none
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    /// Interface kind, [`EventType::Empty`] when the record carries none
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: EventType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: i64,

    /// Payload; `None` on removal records and on types without info
    #[serde(default)]
    pub info: Option<Info>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,

    /// When the record was received; never read from or written to the wire
    #[serde(skip)]
    pub captured_at: Option<DateTime<Utc>>,
}

/// Decode one monitor record.
///
/// Unknown fields are ignored. A known field holding a value of the wrong
/// type fails the whole record.
pub fn decode(record: &str) -> Result<Event> {
    let event: Event = json_decode::parse(record)?;
    trace!(id = event.id, kind = %event.kind, "decoded monitor record");
    Ok(event)
}

/// Decode one monitor record from raw bytes.
pub fn decode_slice(record: &[u8]) -> Result<Event> {
    let event: Event = json_decode::parse_slice(record)?;
    trace!(id = event.id, kind = %event.kind, "decoded monitor record");
    Ok(event)
}

/// Decode one monitor record that has already been parsed as JSON.
pub fn decode_value(record: serde_json::Value) -> Result<Event> {
    let event: Event = json_decode::parse_value(record)?;
    trace!(id = event.id, kind = %event.kind, "decoded monitor record");
    Ok(event)
}

/// Whether the record announces that object `id` was removed.
///
/// True exactly when the payload is absent, the type is empty and the id is
/// non-zero. A zero id does not reference an object.
pub fn is_removal_event(event: &Event) -> bool {
    event.info.is_none() && event.kind.is_empty() && event.id != 0
}

impl Event {
    /// See [`is_removal_event`].
    pub fn is_removal(&self) -> bool {
        is_removal_event(self)
    }

    /// Project the property dictionary onto [`NodeProps`].
    ///
    /// See [`project_node_properties`](crate::projection::project_node_properties).
    pub fn node_props(&self) -> std::result::Result<NodeProps, ProjectionError> {
        crate::projection::project_node_properties(self)
    }

    /// The property dictionary of the payload, if any
    pub fn props(&self) -> Option<&PropertyDictionary> {
        self.info.as_ref().and_then(|info| info.props.as_ref())
    }

    /// Set the receipt timestamp
    pub fn with_captured_at(mut self, at: DateTime<Utc>) -> Self {
        self.captured_at = Some(at);
        self
    }

    /// Stamp the event with the current time as its receipt timestamp
    pub fn mark_captured(&mut self) {
        self.captured_at = Some(Utc::now());
    }
}
