use avdecc_core::{
    ACMP_SUBTYPE, ADP_PDU_LEN, AECP_SUBTYPE, AcmpMessage, AcmpStatus, AdpMessage, AecpMessage,
    AecpPayload, AecpStatus, CodecError, ControllerCapabilities, Header, LegacyAvc, decode_acmp,
    decode_adp, decode_aecp, decode_header, encode_acmp, encode_adp, encode_adp_into,
    encode_aecp, encode_header,
};

fn header(data_length: u16, valid_time: u8) -> Header {
    Header {
        cd: true,
        subtype: AECP_SUBTYPE,
        sv: false,
        version: 0,
        message_type: 2,
        valid_time,
        data_length,
    }
}

#[test]
fn data_length_boundaries_round_trip() {
    for data_length in [0u16, 7, 8, 255, 256, 2047] {
        let bytes = header(data_length, 0).to_bytes().unwrap();
        assert_eq!(decode_header(&bytes).unwrap().data_length, data_length);
    }
    assert!(matches!(
        header(2048, 0).to_bytes(),
        Err(CodecError::ValueOutOfRange { bits: 11, .. })
    ));
}

#[test]
fn valid_time_boundaries() {
    for valid_time in [0u8, 31] {
        let bytes = header(0, valid_time).to_bytes().unwrap();
        assert_eq!(decode_header(&bytes).unwrap().valid_time, valid_time);
    }
    assert!(matches!(
        header(0, 32).to_bytes(),
        Err(CodecError::ValueOutOfRange { bits: 5, .. })
    ));

    let msg = AdpMessage {
        valid_time: 32,
        ..AdpMessage::default()
    };
    assert!(matches!(
        encode_adp(&msg),
        Err(CodecError::ValueOutOfRange { .. })
    ));
}

#[test]
fn adp_needs_all_68_bytes() {
    let bytes = encode_adp(&AdpMessage::default()).unwrap();
    assert_eq!(bytes.len(), 68);
    assert_eq!(
        decode_adp(&bytes[..67]).unwrap_err(),
        CodecError::TruncatedPacket {
            needed: 68,
            actual: 67
        }
    );
    assert!(decode_adp(&bytes).is_ok());
}

fn raw_aecp(message_type: u8, payload_len: usize) -> Vec<u8> {
    let data_length = 18 + payload_len as u16;
    let mut bytes = vec![0u8; 22 + payload_len];
    bytes[0] = 0x80 | AECP_SUBTYPE;
    bytes[1] = message_type;
    bytes[2] = (data_length >> 8) as u8;
    bytes[3] = (data_length & 0xff) as u8;
    bytes
}

#[test]
fn aecp_message_type_selects_payload() {
    let cases = [
        (0u8, 18usize, "vendor_message"),
        (2, 2, "address_access"),
        (4, 2, "legacy_avc"),
        (6, 6, "vendor_unique"),
    ];
    for (message_type, payload_len, name) in cases {
        let msg = decode_aecp(&raw_aecp(message_type, payload_len)).unwrap();
        assert_eq!(msg.payload.name(), name, "message type {message_type}");
        assert!(!msg.response);
    }

    assert_eq!(
        decode_aecp(&raw_aecp(14, 0)).unwrap_err(),
        CodecError::UnsupportedVariant { message_type: 14 }
    );
    assert_eq!(
        decode_aecp(&raw_aecp(9, 0)).unwrap_err(),
        CodecError::UnknownMessageType {
            subtype: AECP_SUBTYPE,
            value: 9
        }
    );
}

#[test]
fn aecp_response_flag_follows_odd_types() {
    let msg = decode_aecp(&raw_aecp(7, 6)).unwrap();
    assert!(msg.response);
    assert!(matches!(msg.payload, AecpPayload::VendorUnique(_)));
}

#[test]
fn acmp_status_31_round_trips_and_reserved_fail() {
    let msg = AcmpMessage {
        status: AcmpStatus::NotSupported,
        ..AcmpMessage::default()
    };
    let mut bytes = encode_acmp(&msg).unwrap();
    assert_eq!(bytes[2] >> 3, 31);
    assert_eq!(decode_acmp(&bytes).unwrap().status, AcmpStatus::NotSupported);

    for status in 16u8..=30 {
        bytes[2] = (bytes[2] & 0x07) | (status << 3);
        assert_eq!(
            decode_acmp(&bytes).unwrap_err(),
            CodecError::UnknownStatus {
                subtype: ACMP_SUBTYPE,
                value: status
            }
        );
    }
}

#[test]
fn controller_capabilities_decode_exactly() {
    let msg = AdpMessage {
        controller_capabilities: ControllerCapabilities::IMPLEMENTED
            | ControllerCapabilities::LAYER3_PROXY,
        ..AdpMessage::default()
    };
    let decoded = decode_adp(&encode_adp(&msg).unwrap()).unwrap();
    assert_eq!(decoded.controller_capabilities.bits(), 0x0003);
    assert!(
        decoded
            .controller_capabilities
            .contains(ControllerCapabilities::IMPLEMENTED)
    );
    assert!(
        decoded
            .controller_capabilities
            .contains(ControllerCapabilities::LAYER3_PROXY)
    );
}

#[test]
fn decoders_reject_foreign_subtypes() {
    let adp = encode_adp(&AdpMessage::default()).unwrap();
    assert!(matches!(
        decode_acmp(&[adp.as_slice(), &[0u8; 8]].concat()),
        Err(CodecError::SubtypeMismatch { .. })
    ));
}

#[test]
fn failed_encodes_leave_buffers_untouched() {
    let mut bad_version = header(0, 0);
    bad_version.version = 8;
    let mut buf = [0xaa; 4];
    assert!(encode_header(&bad_version, &mut buf).is_err());
    assert_eq!(buf, [0xaa; 4]);

    let msg = AdpMessage {
        valid_time: 32,
        entity_id: 0x1122_3344_5566_7788,
        ..AdpMessage::default()
    };
    let mut buf = vec![0xaa; ADP_PDU_LEN];
    assert!(matches!(
        encode_adp_into(&msg, &mut buf),
        Err(CodecError::ValueOutOfRange {
            field: "valid_time",
            ..
        })
    ));
    assert!(buf.iter().all(|&b| b == 0xaa));
}

#[test]
fn avc_length_must_match_payload_extent() {
    let msg = AecpMessage {
        response: false,
        status: AecpStatus::Success,
        target_entity_id: 1,
        controller_entity_id: 2,
        sequence_id: 3,
        payload: AecpPayload::LegacyAvc(LegacyAvc {
            avc_data: vec![1, 2, 3, 4],
        }),
    };
    let mut bytes = encode_aecp(&msg).unwrap();
    assert_eq!(decode_aecp(&bytes).unwrap(), msg);

    bytes[22..24].copy_from_slice(&2u16.to_be_bytes());
    assert_eq!(
        decode_aecp(&bytes).unwrap_err(),
        CodecError::InvalidDataLength { length: 24 }
    );

    bytes[22..24].copy_from_slice(&5u16.to_be_bytes());
    assert!(matches!(
        decode_aecp(&bytes),
        Err(CodecError::TruncatedPacket { .. })
    ));
}
