use std::fs;

use avdecc_capture::{PacketSource, PcapFileSource, PcapngWriter, SourceError};
use pcap_parser::Linktype;

#[test]
fn pcap_source_reads_generated_pcapng() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.pcapng");
    let frames = vec![
        (1_000_000u64, vec![0xaa; 60]),
        (2_500_000u64, vec![0xbb; 61]),
    ];
    PcapngWriter::write_file(&path, &frames).unwrap();

    let mut source = PcapFileSource::open(&path).unwrap();
    let mut events = Vec::new();
    while let Some(event) = source.next_packet().unwrap() {
        events.push(event);
    }

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].linktype, Linktype::ETHERNET);
    assert_eq!(events[0].ts, Some(1.0));
    assert_eq!(events[1].ts, Some(2.5));
    assert_eq!(events[1].data, vec![0xbb; 61]);
}

#[test]
fn pcap_source_reads_legacy_pcap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.pcap");

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&4u16.to_le_bytes());
    bytes.extend_from_slice(&0i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&65_535u32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    let data = [0x11u8; 16];
    bytes.extend_from_slice(&3u32.to_le_bytes());
    bytes.extend_from_slice(&500_000u32.to_le_bytes());
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&data);
    fs::write(&path, bytes).unwrap();

    let mut source = PcapFileSource::open(&path).unwrap();
    let event = source.next_packet().unwrap().unwrap();
    let ts = event.ts.unwrap();
    assert!((ts - 3.5).abs() < 1e-9);
    assert_eq!(event.linktype, Linktype::ETHERNET);
    assert_eq!(event.data, data);
    assert!(source.next_packet().unwrap().is_none());
}

#[test]
fn pcap_source_rejects_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.pcapng");
    fs::write(&path, [0x0a, 0x0d, 0x0d]).unwrap();

    let err = match PcapFileSource::open(&path) {
        Ok(_) => panic!("expected truncated file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}
