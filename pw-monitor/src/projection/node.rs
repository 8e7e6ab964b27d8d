//! Node property projection
//!
//! Narrows the generic [`PropertyDictionary`] of a node event onto
//! [`NodeProps`], the fixed set of properties relevant to audio nodes.
//!
//! ## Usage
//!
//! ```rust
//! use pw_monitor::{decode, project_node_properties};
//!
//! let event = decode(r#"{"id":45,"type":"PipeWire:Interface:Node","info":{"props":{"node.name":"alsa_output.pci"}}}"#)?;
//! let node = project_node_properties(&event)?;
//! assert_eq!(node.name, "alsa_output.pci");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;

use super::{FieldMapping, Narrow};
use crate::common::{DeviceClass, EventType, MediaClass};
use crate::error::ProjectionError;
use crate::event::Event;
use crate::props::{keys, PropertyDictionary};

/// Declares `NodeProps` from `field: type => dictionary_field` entries.
///
/// The wire name of every entry is taken from the dictionary's [`keys`], so
/// the projection reads exactly the names the decoder fills.
macro_rules! node_props {
    (
        $(
            $(#[$field_meta:meta])*
            $field:ident: $ty:ty => $source:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            /// Properties of an audio node
            ///
            /// Properties missing from the event keep their default value.
            #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
            pub struct NodeProps {
                $(
                    $(#[$field_meta])*
                    pub $field: $ty,
                )*
            }

            impl NodeProps {
                /// Name table of the projection
                pub const FIELDS: &'static [FieldMapping] = &[
                    $(
                        FieldMapping {
                            field: stringify!($field),
                            source: stringify!($source),
                            wire_name: keys::[<$source:upper>],
                        },
                    )*
                ];

                /// Copy every present, mapped property out of the dictionary
                pub fn from_dictionary(
                    props: &PropertyDictionary,
                ) -> Result<Self, ProjectionError> {
                    let mut node = NodeProps::default();
                    $(
                        if let Some(value) = &props.$source {
                            node.$field = <$ty as Narrow<_>>::narrow(
                                value,
                                keys::[<$source:upper>],
                            )?;
                        }
                    )*
                    Ok(node)
                }
            }
        }
    };
}

node_props! {
    name: String => node_name,
    description: String => node_description,
    nickname: String => node_nick,
    audio_channels: i64 => audio_channels,
    /// Channel layout, for example `FL,FR`
    audio_position: String => audio_position,
    client_id: i64 => client_id,
    device_class: Option<DeviceClass> => device_class,
    device_id: i64 => device_id,
    device_profile_description: String => device_profile_description,
    device_profile_name: String => device_profile_name,
    factory_id: i64 => factory_id,
    factory_mode: String => factory_mode,
    factory_name: String => factory_name,
    library_name: String => library_name,
    media_class: Option<MediaClass> => media_class,
    object_id: i64 => object_id,
    object_path: String => object_path,
    object_serial: i64 => object_serial,
}

/// Project a node event's property dictionary onto [`NodeProps`].
///
/// Fails with [`ProjectionError::TypeMismatch`] unless the event is a node
/// event, and with [`ProjectionError::MissingInfo`] when it has no payload.
/// A payload without `props` projects to all defaults.
pub fn project_node_properties(event: &Event) -> Result<NodeProps, ProjectionError> {
    if event.kind != EventType::Node {
        return Err(ProjectionError::TypeMismatch {
            expected: EventType::Node,
            found: event.kind.clone(),
        });
    }

    let info = event
        .info
        .as_ref()
        .ok_or(ProjectionError::MissingInfo { id: event.id })?;

    match &info.props {
        Some(props) => NodeProps::from_dictionary(props).inspect_err(|err| {
            tracing::debug!(id = event.id, error = %err, "node projection failed");
        }),
        None => Ok(NodeProps::default()),
    }
}
