//! Enumerated values reported by the daemon.

use super::wire_enum::wire_enum;

wire_enum! {
    /// Interface kind of the object an event describes
    ///
    /// Removal records carry no `type` at all, which decodes to [`EventType::Empty`].
    pub enum EventType {
        /// No type on the record
        Empty => "",
        /// A processing node
        Node => "PipeWire:Interface:Node",
        /// A connection endpoint on a node
        Port => "PipeWire:Interface:Port",
        /// A connection between two ports
        Link => "PipeWire:Interface:Link",
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Empty
    }
}

impl EventType {
    pub fn is_empty(&self) -> bool {
        matches!(self, EventType::Empty)
    }
}

wire_enum! {
    /// Device classification of a node (`device.class`)
    pub enum DeviceClass {
        Sound => "sound",
    }
}

wire_enum! {
    /// Processing state reported in an info payload
    pub enum State {
        Suspended => "suspended",
        Running => "running",
        Idle => "idle",
        Error => "error",
        Creating => "creating",
    }
}

wire_enum! {
    /// Audio role of a node (`media.class`)
    pub enum MediaClass {
        /// A source of audio samples like a microphone
        AudioSource => "Audio/Source",
        /// A sink for audio samples, like an audio card
        AudioSink => "Audio/Sink",
        /// A node that is both a sink and a source
        AudioDuplex => "Audio/Duplex",
        /// A playback stream
        StreamOutputAudio => "Stream/Output/Audio",
        /// A capture stream
        StreamInputAudio => "Stream/Input/Audio",
    }
}

impl MediaClass {
    /// Whether the node produces audio that other nodes can capture
    pub fn is_source(&self) -> bool {
        matches!(self, MediaClass::AudioSource | MediaClass::AudioDuplex)
    }

    /// Whether the node consumes audio from other nodes
    pub fn is_sink(&self) -> bool {
        matches!(self, MediaClass::AudioSink | MediaClass::AudioDuplex)
    }

    /// Whether the node is an application stream rather than a device
    pub fn is_stream(&self) -> bool {
        matches!(
            self,
            MediaClass::StreamOutputAudio | MediaClass::StreamInputAudio
        )
    }
}
