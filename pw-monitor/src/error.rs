//! Error types for monitor record decoding and projection

use thiserror::Error;

use crate::common::EventType;

/// Errors that can occur while decoding a monitor record
///
/// Any of these means the daemon emitted something the wire model does not
/// accept, so they are always surfaced to the caller.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The record is not valid JSON, or a known field holds a value of the
    /// wrong JSON type (for example a string `id`)
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The record exceeds the size limit configured on the [`Decoder`](crate::Decoder)
    #[error("record of {len} bytes exceeds the {limit} byte limit")]
    RecordTooLarge { len: usize, limit: usize },
}

/// Errors that can occur while projecting an event onto a typed property schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The event is not of the interface kind the schema describes
    #[error("expected a `{expected}` event, found `{found}`")]
    TypeMismatch {
        expected: EventType,
        found: EventType,
    },

    /// The event carries no info payload (removal records, or types without info)
    #[error("event {id} has no info payload")]
    MissingInfo { id: i64 },

    /// A property is present but its value has a JSON type the projected
    /// field cannot hold
    #[error("property `{property}` has value {value} which does not fit the projected field")]
    ValueTypeMismatch {
        property: &'static str,
        value: String,
    },
}

/// Result type alias for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;
