use std::path::Path;

use avdecc_capture::{PacketEvent, PcapngWriter, Report, analyze_pcap_file, analyze_source};
use avdecc_core::{
    AVTP_ETHERTYPE, AcmpMessage, AcmpMessageType, AdpMessage, AdpMessageType, AecpMessage,
    AecpPayload, AecpStatus, VendorUnique, encode_acmp, encode_adp, encode_aecp,
};
use pcap_parser::Linktype;

const TALKER_MAC: [u8; 6] = [0x00, 0x1b, 0x92, 0x00, 0x00, 0x01];
const LISTENER_MAC: [u8; 6] = [0x00, 0x1b, 0x92, 0x00, 0x00, 0x02];
const ADP_MULTICAST: [u8; 6] = [0x91, 0xe0, 0xf0, 0x01, 0x00, 0x00];

fn ethernet(src: [u8; 6], ether_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&ADP_MULTICAST);
    frame.extend_from_slice(&src);
    frame.extend_from_slice(&ether_type.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

fn vlan_tagged(src: [u8; 6], payload: &[u8]) -> Vec<u8> {
    let mut tagged = Vec::new();
    tagged.extend_from_slice(&0x6002u16.to_be_bytes());
    tagged.extend_from_slice(&AVTP_ETHERTYPE.to_be_bytes());
    tagged.extend_from_slice(payload);
    ethernet(src, 0x8100, &tagged)
}

fn available(entity_id: u64, available_index: u32) -> AdpMessage {
    AdpMessage {
        message_type: AdpMessageType::EntityAvailable,
        valid_time: 10,
        entity_id,
        vendor_id: 0x001b_9200,
        model_id: 0x0000_0042,
        available_index,
        ..AdpMessage::default()
    }
}

fn write_capture(path: &Path) {
    let talker = 0x001b_92ff_fe00_0001;
    let listener = 0x001b_92ff_fe00_0002;
    let departing = AdpMessage {
        message_type: AdpMessageType::EntityDeparting,
        ..available(listener, 3)
    };
    let connect = AcmpMessage {
        message_type: AcmpMessageType::ConnectRxCommand,
        talker_entity_id: talker,
        listener_entity_id: listener,
        ..AcmpMessage::default()
    };
    let vendor_unique = AecpMessage {
        response: false,
        status: AecpStatus::Success,
        target_entity_id: talker,
        controller_entity_id: listener,
        sequence_id: 1,
        payload: AecpPayload::VendorUnique(VendorUnique {
            protocol_id: 0x001b_9200_0001,
            payload: vec![1, 2, 3],
        }),
    };
    let truncated_adp = encode_adp(&available(talker, 9)).unwrap()[..40].to_vec();

    let frames = vec![
        ethernet(TALKER_MAC, AVTP_ETHERTYPE, &encode_adp(&available(talker, 1)).unwrap()),
        ethernet(LISTENER_MAC, AVTP_ETHERTYPE, &encode_adp(&available(listener, 2)).unwrap()),
        ethernet(TALKER_MAC, 0x0800, &[0x45, 0x00, 0x00, 0x14]),
        ethernet(LISTENER_MAC, AVTP_ETHERTYPE, &encode_acmp(&connect).unwrap()),
        vlan_tagged(LISTENER_MAC, &encode_aecp(&vendor_unique).unwrap()),
        ethernet(TALKER_MAC, AVTP_ETHERTYPE, &encode_adp(&available(talker, 5)).unwrap()),
        ethernet(TALKER_MAC, AVTP_ETHERTYPE, &truncated_adp),
        ethernet(LISTENER_MAC, AVTP_ETHERTYPE, &encode_adp(&departing).unwrap()),
    ];
    let frames: Vec<(u64, Vec<u8>)> = frames
        .into_iter()
        .enumerate()
        .map(|(idx, frame)| (idx as u64 * 1_000_000, frame))
        .collect();
    PcapngWriter::write_file(path, &frames).unwrap();
}

fn analyze_fixture() -> Report {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avdecc.pcapng");
    write_capture(&path);
    analyze_pcap_file(&path).unwrap()
}

#[test]
fn capture_summary_counts_frames() {
    let report = analyze_fixture();
    let summary = report.capture_summary.unwrap();
    assert_eq!(summary.packets_total, 8);
    assert_eq!(summary.avdecc_frames, 7);
    assert_eq!(summary.decoded_messages, 6);
    assert_eq!(summary.time_start.as_deref(), Some("1970-01-01T00:00:00Z"));
    assert_eq!(summary.time_end.as_deref(), Some("1970-01-01T00:00:07Z"));
    assert_eq!(report.generated_at, "1970-01-01T00:00:07Z");
}

#[test]
fn message_counters_are_sorted() {
    let report = analyze_fixture();
    let counters: Vec<_> = report
        .messages
        .iter()
        .map(|m| (m.protocol.as_str(), m.message_type, m.name.as_str(), m.count))
        .collect();
    assert_eq!(
        counters,
        vec![
            ("acmp", 6, "ConnectRxCommand", 1),
            ("adp", 0, "EntityAvailable", 3),
            ("adp", 1, "EntityDeparting", 1),
            ("aecp", 6, "VendorUniqueCommand", 1),
        ]
    );
}

#[test]
fn entities_track_latest_advertisement() {
    let report = analyze_fixture();
    assert_eq!(report.entities.len(), 2);

    let talker = &report.entities[0];
    assert_eq!(talker.entity_id, "0x001b92fffe000001");
    assert_eq!(talker.vendor_id, "0x001b9200");
    assert_eq!(talker.available_index, 5);
    assert_eq!(talker.adp_count, 2);
    assert!(!talker.departed);
    assert_eq!(talker.source_mac, "00:1b:92:00:00:01");
    assert_eq!(talker.last_seen.as_deref(), Some("1970-01-01T00:00:05Z"));

    let listener = &report.entities[1];
    assert!(listener.departed);
    assert_eq!(listener.available_index, 2);
    assert_eq!(listener.adp_count, 2);
}

#[test]
fn decode_failures_become_violations() {
    let report = analyze_fixture();
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.id, "AVDECC-TRUNCATED");
    assert_eq!(violation.count, 1);
    assert_eq!(
        violation.examples,
        vec!["packet 7 from 00:1b:92:00:00:01 @ 1970-01-01T00:00:06Z"]
    );
}

#[test]
fn report_json_is_deterministic() {
    let mut first = serde_json::to_value(analyze_fixture()).unwrap();
    let mut second = serde_json::to_value(analyze_fixture()).unwrap();
    first["input"]["path"] = serde_json::Value::Null;
    second["input"]["path"] = serde_json::Value::Null;
    assert_eq!(first, second);
}

#[test]
fn in_memory_source_without_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("placeholder.pcapng");
    std::fs::write(&path, b"").unwrap();

    let adp = encode_adp(&available(0x42, 1)).unwrap();
    let events = vec![
        PacketEvent {
            ts: None,
            linktype: Linktype::ETHERNET,
            data: ethernet(TALKER_MAC, AVTP_ETHERTYPE, &adp),
        },
        PacketEvent {
            ts: None,
            linktype: Linktype::RAW,
            data: adp,
        },
    ];

    let report = analyze_source(&path, events.into_iter()).unwrap();
    let summary = report.capture_summary.as_ref().unwrap();
    assert_eq!(summary.packets_total, 2);
    assert_eq!(summary.avdecc_frames, 1);
    assert!(summary.time_start.is_none());
    assert_eq!(report.generated_at, avdecc_capture::DEFAULT_GENERATED_AT);
    assert_eq!(report.entities[0].entity_id, "0x0000000000000042");
    assert!(report.entities[0].last_seen.is_none());
}
