use super::AdpMessage;
use super::layout;
use crate::protocols::common::reader::PduReader;
use crate::protocols::constants::{
    AudioFormats, ControllerCapabilities, EntityCapabilities, EntityType, ListenerCapabilities,
    TalkerCapabilities,
};
use crate::protocols::enums::AdpMessageType;
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, expect_subtype};

/// Decode an ADP PDU.
///
/// Bytes past the fixed 68-byte layout are ignored.
///
/// # Errors
/// `TruncatedPacket` below 68 bytes, `SubtypeMismatch` for non-ADP buffers,
/// `UnknownMessageType` for message types outside 0..=2.
pub fn decode_adp(payload: &[u8]) -> Result<AdpMessage, CodecError> {
    let reader = PduReader::new(payload);
    reader.require_len(layout::ADP_PDU_LEN)?;
    let header = expect_subtype(payload, Subtype::Adp)?;
    let message_type = AdpMessageType::try_from(header.message_type)?;

    Ok(AdpMessage {
        message_type,
        valid_time: header.valid_time,
        entity_id: reader.read_u64_be(layout::ENTITY_ID_RANGE)?,
        vendor_id: reader.read_u32_be(layout::VENDOR_ID_RANGE)?,
        model_id: reader.read_u32_be(layout::MODEL_ID_RANGE)?,
        entity_capabilities: EntityCapabilities::from_bits_retain(
            reader.read_u32_be(layout::ENTITY_CAPABILITIES_RANGE)?,
        ),
        talker_stream_sources: reader.read_u16_be(layout::TALKER_STREAM_SOURCES_RANGE)?,
        talker_capabilities: TalkerCapabilities::from_bits_retain(
            reader.read_u16_be(layout::TALKER_CAPABILITIES_RANGE)?,
        ),
        listener_stream_sinks: reader.read_u16_be(layout::LISTENER_STREAM_SINKS_RANGE)?,
        listener_capabilities: ListenerCapabilities::from_bits_retain(
            reader.read_u16_be(layout::LISTENER_CAPABILITIES_RANGE)?,
        ),
        controller_capabilities: ControllerCapabilities::from_bits_retain(
            reader.read_u32_be(layout::CONTROLLER_CAPABILITIES_RANGE)?,
        ),
        available_index: reader.read_u32_be(layout::AVAILABLE_INDEX_RANGE)?,
        grandmaster_id: reader.read_u64_be(layout::GRANDMASTER_ID_RANGE)?,
        default_audio_format: AudioFormats::from_bits_retain(
            reader.read_u32_be(layout::DEFAULT_AUDIO_FORMAT_RANGE)?,
        ),
        default_video_format: reader.read_u32_be(layout::DEFAULT_VIDEO_FORMAT_RANGE)?,
        association_id: reader.read_u64_be(layout::ASSOCIATION_ID_RANGE)?,
        entity_type: EntityType::from_bits_retain(reader.read_u32_be(layout::ENTITY_TYPE_RANGE)?),
    })
}

#[cfg(test)]
mod tests {
    use super::decode_adp;
    use crate::protocols::adp::layout;
    use crate::protocols::constants::{ACMP_SUBTYPE, ADP_SUBTYPE, ControllerCapabilities};
    use crate::protocols::enums::AdpMessageType;
    use crate::protocols::error::CodecError;

    fn raw_adp() -> Vec<u8> {
        let mut payload = vec![0u8; layout::ADP_PDU_LEN];
        payload[0] = 0x80 | ADP_SUBTYPE;
        payload[1] = AdpMessageType::EntityAvailable.as_u8();
        payload[2] = 10 << 3;
        payload[3] = layout::ADP_DATA_LENGTH as u8;
        payload
    }

    #[test]
    fn parse_valid_adp() {
        let mut payload = raw_adp();
        payload[layout::ENTITY_ID_RANGE].copy_from_slice(&0x0011_2233_4455_6677u64.to_be_bytes());
        payload[layout::AVAILABLE_INDEX_RANGE].copy_from_slice(&9u32.to_be_bytes());
        payload[layout::ENTITY_TYPE_RANGE].copy_from_slice(&0x0004_0000u32.to_be_bytes());

        let parsed = decode_adp(&payload).unwrap();
        assert_eq!(parsed.message_type, AdpMessageType::EntityAvailable);
        assert_eq!(parsed.valid_time, 10);
        assert_eq!(parsed.entity_id, 0x0011_2233_4455_6677);
        assert_eq!(parsed.available_index, 9);
        assert_eq!(parsed.entity_type.bits(), 0x0004_0000);
    }

    #[test]
    fn parse_one_byte_short() {
        let payload = raw_adp();
        let err = decode_adp(&payload[..layout::ADP_PDU_LEN - 1]).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedPacket {
                needed: layout::ADP_PDU_LEN,
                actual: layout::ADP_PDU_LEN - 1
            }
        );
        assert!(decode_adp(&payload).is_ok());
    }

    #[test]
    fn parse_controller_capabilities_exactly() {
        let mut payload = raw_adp();
        let both = ControllerCapabilities::IMPLEMENTED | ControllerCapabilities::LAYER3_PROXY;
        payload[layout::CONTROLLER_CAPABILITIES_RANGE].copy_from_slice(&both.bits().to_be_bytes());

        let parsed = decode_adp(&payload).unwrap();
        assert_eq!(parsed.controller_capabilities, both);
        assert!(
            parsed
                .controller_capabilities
                .contains(ControllerCapabilities::IMPLEMENTED)
        );
        assert!(
            parsed
                .controller_capabilities
                .contains(ControllerCapabilities::LAYER3_PROXY)
        );
        assert_eq!(parsed.controller_capabilities.bits(), 0x0003);
    }

    #[test]
    fn parse_rejects_other_subtypes() {
        let mut payload = raw_adp();
        payload[0] = 0x80 | ACMP_SUBTYPE;
        assert_eq!(
            decode_adp(&payload).unwrap_err(),
            CodecError::SubtypeMismatch {
                expected: ADP_SUBTYPE,
                found: ACMP_SUBTYPE
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_message_type() {
        let mut payload = raw_adp();
        payload[1] = 3;
        assert!(matches!(
            decode_adp(&payload),
            Err(CodecError::UnknownMessageType { value: 3, .. })
        ));
    }
}
