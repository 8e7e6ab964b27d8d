//! Integration tests decoding records as the monitor writes them

use pw_monitor::{
    decode, is_removal_event, project_node_properties, DecodeError, Decoder, DecoderConfig,
    EventType, MediaClass, ProjectionError, State,
};
use rstest::rstest;

const NODE_RECORD: &str = r#"{
    "id": 45,
    "type": "PipeWire:Interface:Node",
    "version": 3,
    "permissions": [ "r", "w", "x", "m" ],
    "info": {
      "max-input-ports": 65,
      "max-output-ports": 0,
      "change-mask": [ "input-ports", "output-ports", "state", "props", "params" ],
      "n-input-ports": 2,
      "n-output-ports": 2,
      "state": "suspended",
      "error": null,
      "props": {
        "adapt.follower.spa-node": "",
        "audio.channels": 2,
        "audio.position": "FL,FR",
        "client.id": 33,
        "clock.quantum-limit": 8192,
        "device.api": "alsa",
        "device.class": "sound",
        "device.id": 40,
        "device.profile.description": "Analog Stereo",
        "device.profile.name": "analog-stereo",
        "factory.id": 18,
        "factory.mode": "merge",
        "factory.name": "api.alsa.pcm.sink",
        "library.name": "audioconvert/libspa-audioconvert",
        "media.class": "Audio/Sink",
        "node.description": "Built-in Audio Analog Stereo",
        "node.name": "alsa_output.pci-0000_00_1f.3.analog-stereo",
        "node.nick": "ALC257 Analog",
        "node.pause-on-idle": false,
        "object.id": 45,
        "object.path": "alsa:pcm:0:front:0:playback",
        "object.serial": 46,
        "priority.driver": 1009
      },
      "params": {
        "EnumFormat": [
          {
            "mediaType": "audio",
            "mediaSubtype": "raw",
            "format": { "default": "S32LE", "alt1": "S24_32LE" },
            "rate": 48000,
            "channels": 2,
            "position": [ "FL", "FR" ]
          }
        ],
        "PropInfo": [ { "id": "volume", "description": "Volume" } ],
        "Props": [ { "volume": 1.0, "mute": false } ],
        "Format": [ ],
        "EnumPortConfig": [ ],
        "PortConfig": [ ],
        "Latency": [
          { "direction": "Input", "minQuantum": 1.0, "maxQuantum": 1.0, "minRate": 0, "maxRate": 0, "minNs": 0, "maxNs": 0 },
          { "direction": "Output", "minQuantum": 1.0, "maxQuantum": 1.0, "minRate": 0, "maxRate": 0, "minNs": 0, "maxNs": 0 }
        ],
        "ProcessLatency": [ ],
        "Tag": [ ]
      }
    }
  }"#;

const PORT_RECORD: &str = r#"{
    "id": 51,
    "type": "PipeWire:Interface:Port",
    "version": 3,
    "permissions": [ "r", "w", "x", "m" ],
    "info": {
      "direction": "output",
      "change-mask": [ "props", "params" ],
      "props": {
        "audio.channel": "FL",
        "format.dsp": "32 bit float mono audio",
        "node.id": 45,
        "object.path": "alsa:pcm:0:front:0:playback:monitor_0",
        "object.serial": 52,
        "port.alias": "Built-in Audio Analog Stereo:monitor_FL",
        "port.direction": "out",
        "port.group": "stream.0",
        "port.id": 0,
        "port.monitor": true,
        "port.name": "monitor_FL"
      },
      "params": {
        "EnumFormat": [ { "mediaType": "audio", "mediaSubtype": "dsp", "format": "F32P" } ],
        "Meta": [ { "type": "Header", "size": 32 } ],
        "IO": [ { "id": "Buffers", "size": 8 } ],
        "Format": [ ],
        "Buffers": [ ],
        "Latency": [ ],
        "Tag": [ ]
      }
    }
  }"#;

const LINK_RECORD: &str = r#"{
    "id": 87,
    "type": "PipeWire:Interface:Link",
    "version": 3,
    "permissions": [ "r", "x" ],
    "info": {
      "output-node-id": 45,
      "output-port-id": 51,
      "input-node-id": 80,
      "input-port-id": 83,
      "change-mask": [ "state", "format", "props" ],
      "state": "active",
      "error": null,
      "format": { "mediaType": "audio", "mediaSubtype": "dsp", "format": "F32P" },
      "props": {
        "client.id": 35,
        "factory.id": 20,
        "link.input.node": 80,
        "link.input.port": 83,
        "link.output.node": 45,
        "link.output.port": 51,
        "object.id": 87,
        "object.linger": false,
        "object.serial": 1204
      }
    }
  }"#;

#[test]
fn test_node_record() {
    let event = decode(NODE_RECORD).unwrap();
    assert_eq!(event.id, 45);
    assert_eq!(event.kind, EventType::Node);
    assert!(!is_removal_event(&event));

    let info = event.info.as_ref().unwrap();
    assert_eq!(info.state, Some(State::Suspended));
    assert_eq!(info.n_output_ports, Some(2));

    let params = info.params.as_ref().unwrap();
    assert_eq!(params.enum_format[0].media_subtype, "raw");
    assert_eq!(params.enum_format[0].format["default"], "S32LE");
    assert_eq!(params.latency.len(), 2);
    assert!(params.format.is_empty());

    let node = project_node_properties(&event).unwrap();
    assert_eq!(node.name, "alsa_output.pci-0000_00_1f.3.analog-stereo");
    assert_eq!(node.description, "Built-in Audio Analog Stereo");
    assert_eq!(node.audio_position, "FL,FR");
    assert_eq!(node.factory_name, "api.alsa.pcm.sink");
    assert_eq!(node.media_class, Some(MediaClass::AudioSink));
    assert!(node.media_class.unwrap().is_sink());
}

#[test]
fn test_port_record() {
    let event = decode(PORT_RECORD).unwrap();
    assert_eq!(event.kind, EventType::Port);

    let info = event.info.as_ref().unwrap();
    assert_eq!(info.direction.as_deref(), Some("output"));

    let props = event.props().unwrap();
    assert_eq!(props.port_name.as_deref(), Some("monitor_FL"));
    assert_eq!(props.port_id, Some(0));
    assert_eq!(props.node_id, Some(45));
    assert_eq!(props.port_physical, None);

    let params = info.params.as_ref().unwrap();
    assert_eq!(params.meta[0].kind, "Header");
    assert_eq!(params.io[0].id, "Buffers");

    assert!(matches!(
        project_node_properties(&event),
        Err(ProjectionError::TypeMismatch { found: EventType::Port, .. })
    ));
}

#[test]
fn test_link_record() {
    let event = decode(LINK_RECORD).unwrap();
    assert_eq!(event.kind, EventType::Link);
    assert_eq!(event.permissions, vec!["r", "x"]);

    let info = event.info.as_ref().unwrap();
    assert_eq!(info.output_port_id, Some(51));
    assert_eq!(info.input_node_id, Some(80));

    let props = event.props().unwrap();
    assert_eq!(props.link_output_node, Some(45));
    assert_eq!(props.link_input_port, Some(83));
    assert_eq!(props.object_linger, Some(false));
}

#[test]
fn test_update_record_carries_only_changes() {
    let event = decode(
        r#"{"id":45,"type":"PipeWire:Interface:Node","version":3,"permissions":["r","w","x","m"],"info":{"change-mask":["state"],"state":"running","error":null}}"#,
    )
    .unwrap();

    let info = event.info.as_ref().unwrap();
    assert!(info.has_changed("state"));
    assert_eq!(info.state, Some(State::Running));
    assert!(info.props.is_none());
    assert!(info.params.is_none());
}

#[rstest]
#[case(r#"{"id": 128, "info": null}"#, true)]
#[case(r#"{"id": 128}"#, true)]
#[case(r#"{"id": 0, "info": null}"#, false)]
#[case(r#"{"info": null}"#, false)]
#[case(NODE_RECORD, false)]
#[case(PORT_RECORD, false)]
#[case(LINK_RECORD, false)]
fn test_removal_records(#[case] record: &str, #[case] expected: bool) {
    let event = decode(record).unwrap();
    assert_eq!(is_removal_event(&event), expected);
}

#[test]
fn test_removed_node_cannot_be_projected() {
    let event = decode(r#"{"id":45,"type":"PipeWire:Interface:Node","info":null}"#).unwrap();
    assert!(!event.is_removal());
    assert_eq!(
        event.node_props(),
        Err(ProjectionError::MissingInfo { id: 45 })
    );
}

#[test]
fn test_string_id_fails() {
    let err = decode(r#"{"id":"45","type":"PipeWire:Interface:Node"}"#).unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn test_unknown_top_level_and_property_names() {
    let event = decode(
        r#"{"id":45,"type":"PipeWire:Interface:Node","origin":"remote","info":{"props":{"node.name":"sink","vendor.secret":"x"}}}"#,
    )
    .unwrap();
    let node = event.node_props().unwrap();
    assert_eq!(node.name, "sink");
}

#[test]
fn test_other_interface_kinds_decode() {
    let event = decode(
        r#"{"id":0,"type":"PipeWire:Interface:Core","version":4,"permissions":["r","x","m"],"info":{"cookie":1234,"name":"pipewire-0","change-mask":["props"],"props":{"object.id":0}}}"#,
    )
    .unwrap();
    assert_eq!(
        event.kind,
        EventType::Other("PipeWire:Interface:Core".to_string())
    );
    assert_eq!(event.props().and_then(|p| p.object_id), Some(0));
}

#[test]
fn test_decoder_over_a_recorded_stream() {
    let stream = [
        NODE_RECORD,
        PORT_RECORD,
        LINK_RECORD,
        r#"{"id": 87, "info": null}"#,
        r#"{"id": 51, "info": null}"#,
    ];

    let decoder = Decoder::new(DecoderConfig::replay()).unwrap();
    let events: Vec<_> = stream
        .iter()
        .map(|record| decoder.decode(record).unwrap())
        .collect();

    let removed: Vec<i64> = events
        .iter()
        .filter(|event| event.is_removal())
        .map(|event| event.id)
        .collect();
    assert_eq!(removed, vec![87, 51]);
    assert!(events.iter().all(|event| event.captured_at.is_none()));
}

#[test]
fn test_event_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<pw_monitor::Event>();
    assert_send_sync::<pw_monitor::NodeProps>();
    assert_send_sync::<Decoder>();
    assert_send_sync::<DecodeError>();
}
