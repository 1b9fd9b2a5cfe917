use super::AcmpMessage;
use super::layout;
use crate::protocols::common::writer::PduWriter;
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, control_header};

pub fn encode_acmp(message: &AcmpMessage) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; layout::ACMP_PDU_LEN];
    encode_acmp_into(message, &mut buf)?;
    Ok(buf)
}

/// Encode an ACMP PDU into the first 56 bytes of `buf`.
pub fn encode_acmp_into(message: &AcmpMessage, buf: &mut [u8]) -> Result<(), CodecError> {
    let header = control_header(
        Subtype::Acmp,
        message.message_type.as_u8(),
        message.status.as_u8(),
        layout::ACMP_DATA_LENGTH,
    )
    .to_bytes()?;
    let mut writer = PduWriter::with_len(buf, layout::ACMP_PDU_LEN)?;
    writer.write_u64_be(layout::STREAM_ID_RANGE, message.stream_id)?;
    writer.write_u64_be(
        layout::CONTROLLER_ENTITY_ID_RANGE,
        message.controller_entity_id,
    )?;
    writer.write_u64_be(layout::TALKER_ENTITY_ID_RANGE, message.talker_entity_id)?;
    writer.write_u64_be(layout::LISTENER_ENTITY_ID_RANGE, message.listener_entity_id)?;
    writer.write_u16_be(layout::TALKER_UNIQUE_ID_RANGE, message.talker_unique_id)?;
    writer.write_u16_be(layout::LISTENER_UNIQUE_ID_RANGE, message.listener_unique_id)?;
    writer.write_slice(layout::DEST_MAC_RANGE.start, &message.dest_mac)?;
    writer.write_u16_be(layout::CONNECTION_COUNT_RANGE, message.connection_count)?;
    writer.write_u16_be(layout::SEQUENCE_ID_RANGE, message.sequence_id)?;
    writer.write_u16_be(layout::FLAGS_RANGE, message.flags.bits())?;
    writer.write_u32_be(layout::DEFAULT_FORMAT_RANGE, message.default_format)?;
    writer.write_slice(0, &header)
}
