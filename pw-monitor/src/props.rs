//! Generic property dictionary of daemon objects.
//!
//! The daemon attaches a free-form `props` object to every info payload. The
//! keys are dotted lower-case names (`node.name`, `object.serial`) and only
//! the properties relevant to the object kind are present; update events
//! carry only the properties that changed.
//!
//! [`PropertyDictionary`] models a fixed vocabulary of those keys as
//! explicitly optional fields: `None` means "not present in this update",
//! which is distinct from a present zero value. Keys outside the vocabulary
//! are dropped while decoding.
//!
//! The vocabulary is declared once in the `property_dictionary!` invocation
//! below. It drives the serde field names, the [`keys`] constants and
//! [`PropertyDictionary::WIRE_NAMES`], so typed projections that read keys
//! through those constants always agree with the decoder.

use serde::{Deserialize, Serialize};

macro_rules! property_dictionary {
    (
        $(
            $(#[$field_meta:meta])*
            $field:ident: $ty:ty => $wire:literal
        ),* $(,)?
    ) => {
        paste::paste! {
            /// Wire names of every property in the dictionary vocabulary
            pub mod keys {
                $(
                    pub const [<$field:upper>]: &str = $wire;
                )*
            }
        }

        /// Sparse dictionary of known daemon object properties
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct PropertyDictionary {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl PropertyDictionary {
            /// `(field, wire name)` pairs for every property in the vocabulary
            pub const WIRE_NAMES: &'static [(&'static str, &'static str)] = &[
                $((stringify!($field), $wire),)*
            ];
        }
    };
}

property_dictionary! {
    adapt_follower_spa_node: String => "adapt.follower.spa-node",
    application_icon_name: String => "application.icon-name",
    application_id: String => "application.id",
    application_name: String => "application.name",
    /// Number of audio channels of the node
    audio_channels: i64 => "audio.channels",
    /// Channel of a port within its node's layout (`FL`, `FR`, ...)
    audio_channel: String => "audio.channel",
    /// Channel layout of the node (`FL,FR`)
    audio_position: String => "audio.position",
    /// Id of the client that owns the object
    client_id: i64 => "client.id",
    clock_quantum_limit: i64 => "clock.quantum-limit",
    device_class: String => "device.class",
    device_id: i64 => "device.id",
    device_profile_description: String => "device.profile.description",
    device_profile_name: String => "device.profile.name",
    factory_id: i64 => "factory.id",
    factory_mode: String => "factory.mode",
    factory_name: String => "factory.name",
    format_dsp: String => "format.dsp",
    library_name: String => "library.name",
    link_input_node: i64 => "link.input.node",
    link_input_port: i64 => "link.input.port",
    link_output_node: i64 => "link.output.node",
    link_output_port: i64 => "link.output.port",
    media_category: String => "media.category",
    media_class: String => "media.class",
    media_name: String => "media.name",
    media_role: String => "media.role",
    media_type: String => "media.type",
    node_always_process: bool => "node.always-process",
    node_autoconnect: bool => "node.autoconnect",
    node_description: String => "node.description",
    /// Id of the node a port belongs to
    node_id: i64 => "node.id",
    node_loop_name: String => "node.loop.name",
    node_name: String => "node.name",
    node_nick: String => "node.nick",
    /// Rate as a fraction, for example `1/48000`
    node_rate: String => "node.rate",
    node_want_driver: bool => "node.want-driver",
    object_id: i64 => "object.id",
    object_linger: bool => "object.linger",
    object_path: String => "object.path",
    object_register: bool => "object.register",
    object_serial: i64 => "object.serial",
    port_alias: String => "port.alias",
    /// `in` or `out`
    port_direction: String => "port.direction",
    port_group: String => "port.group",
    port_id: i64 => "port.id",
    port_name: String => "port.name",
    port_physical: bool => "port.physical",
    port_terminal: bool => "port.terminal",
    stream_is_live: bool => "stream.is-live",
}

impl PropertyDictionary {
    /// Look up the wire name of a dictionary field
    pub fn wire_name(field: &str) -> Option<&'static str> {
        Self::WIRE_NAMES
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, wire)| *wire)
    }

    /// Whether no property of the vocabulary is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
