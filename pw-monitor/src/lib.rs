//! # pw-monitor
//!
//! Typed decoding of the JSON event stream written by PipeWire's monitor
//! (`pw-dump --monitor`). Each record is decoded into an [`Event`] with a
//! strongly typed payload, and helpers interpret the record: whether it
//! announces a removal, and what it says about a node.
//!
//! Reading the monitor process or socket and splitting its output into
//! records is left to the caller; this crate decodes one record per call and
//! performs no I/O.
//!
//! ## Usage
//!
//! ```rust
//! use pw_monitor::{decode, is_removal_event, EventType};
//!
//! let event = decode(r#"{"id":45,"type":"PipeWire:Interface:Node","version":3,"info":{"props":{"node.name":"alsa_output.pci"}}}"#)?;
//! assert_eq!(event.kind, EventType::Node);
//! assert_eq!(event.node_props()?.name, "alsa_output.pci");
//!
//! let removed = decode(r#"{"id":128,"info":null}"#)?;
//! assert!(is_removal_event(&removed));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Configured decoding
//! ```rust
//! use pw_monitor::{Decoder, DecoderConfig};
//!
//! let decoder = Decoder::new(DecoderConfig::live())?;
//! let event = decoder.decode(r#"{"id":128}"#)?;
//! assert!(event.captured_at.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod common;
pub mod config;
pub mod decoder;
pub mod error;
pub mod event;
pub mod info;
pub mod logging;
pub mod params;
pub mod projection;
pub mod props;

// Re-export error types for convenient top-level access
pub use error::{DecodeError, ProjectionError, Result};

// Re-export the record model
pub use common::{DeviceClass, EventType, MediaClass, State};
pub use event::{decode, decode_slice, decode_value, is_removal_event, Event};
pub use info::Info;
pub use params::{EnumFormatParam, IoParam, LatencyParam, MetaParam, Params};
pub use props::PropertyDictionary;

pub use config::{ConfigError, DecoderConfig};
pub use decoder::Decoder;
pub use projection::{project_node_properties, NodeProps};
