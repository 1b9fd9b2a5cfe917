use super::AcmpMessage;
use super::layout;
use crate::protocols::common::reader::PduReader;
use crate::protocols::constants::AcmpFlags;
use crate::protocols::enums::{AcmpMessageType, AcmpStatus};
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, expect_subtype};

/// Decode an ACMP PDU.
///
/// The status code travels in the header's 5-bit valid-time slot.
///
/// # Errors
/// `TruncatedPacket` below 56 bytes, `SubtypeMismatch` for non-ACMP
/// buffers, `UnknownMessageType` for types 14/15 and `UnknownStatus` for the
/// reserved statuses 16..=30.
pub fn decode_acmp(payload: &[u8]) -> Result<AcmpMessage, CodecError> {
    let reader = PduReader::new(payload);
    reader.require_len(layout::ACMP_PDU_LEN)?;
    let header = expect_subtype(payload, Subtype::Acmp)?;
    let message_type = AcmpMessageType::try_from(header.message_type)?;
    let status = AcmpStatus::try_from(header.valid_time)?;

    Ok(AcmpMessage {
        message_type,
        status,
        stream_id: reader.read_u64_be(layout::STREAM_ID_RANGE)?,
        controller_entity_id: reader.read_u64_be(layout::CONTROLLER_ENTITY_ID_RANGE)?,
        talker_entity_id: reader.read_u64_be(layout::TALKER_ENTITY_ID_RANGE)?,
        listener_entity_id: reader.read_u64_be(layout::LISTENER_ENTITY_ID_RANGE)?,
        talker_unique_id: reader.read_u16_be(layout::TALKER_UNIQUE_ID_RANGE)?,
        listener_unique_id: reader.read_u16_be(layout::LISTENER_UNIQUE_ID_RANGE)?,
        dest_mac: reader.read_array(layout::DEST_MAC_RANGE)?,
        connection_count: reader.read_u16_be(layout::CONNECTION_COUNT_RANGE)?,
        sequence_id: reader.read_u16_be(layout::SEQUENCE_ID_RANGE)?,
        flags: AcmpFlags::from_bits_retain(reader.read_u16_be(layout::FLAGS_RANGE)?),
        default_format: reader.read_u32_be(layout::DEFAULT_FORMAT_RANGE)?,
    })
}
