use super::AdpMessage;
use super::layout;
use crate::protocols::common::writer::PduWriter;
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, control_header};

/// Encode an ADP PDU into a fresh 68-byte buffer.
pub fn encode_adp(message: &AdpMessage) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; layout::ADP_PDU_LEN];
    encode_adp_into(message, &mut buf)?;
    Ok(buf)
}

/// Encode an ADP PDU into the first 68 bytes of `buf`.
///
/// # Errors
/// `TruncatedPacket` if `buf` is too small, `ValueOutOfRange` if
/// `valid_time` needs more than 5 bits.
pub fn encode_adp_into(message: &AdpMessage, buf: &mut [u8]) -> Result<(), CodecError> {
    let header = control_header(
        Subtype::Adp,
        message.message_type.as_u8(),
        message.valid_time,
        layout::ADP_DATA_LENGTH,
    )
    .to_bytes()?;
    let mut writer = PduWriter::with_len(buf, layout::ADP_PDU_LEN)?;
    writer.write_u64_be(layout::ENTITY_ID_RANGE, message.entity_id)?;
    writer.write_u32_be(layout::VENDOR_ID_RANGE, message.vendor_id)?;
    writer.write_u32_be(layout::MODEL_ID_RANGE, message.model_id)?;
    writer.write_u32_be(
        layout::ENTITY_CAPABILITIES_RANGE,
        message.entity_capabilities.bits(),
    )?;
    writer.write_u16_be(
        layout::TALKER_STREAM_SOURCES_RANGE,
        message.talker_stream_sources,
    )?;
    writer.write_u16_be(
        layout::TALKER_CAPABILITIES_RANGE,
        message.talker_capabilities.bits(),
    )?;
    writer.write_u16_be(
        layout::LISTENER_STREAM_SINKS_RANGE,
        message.listener_stream_sinks,
    )?;
    writer.write_u16_be(
        layout::LISTENER_CAPABILITIES_RANGE,
        message.listener_capabilities.bits(),
    )?;
    writer.write_u32_be(
        layout::CONTROLLER_CAPABILITIES_RANGE,
        message.controller_capabilities.bits(),
    )?;
    writer.write_u32_be(layout::AVAILABLE_INDEX_RANGE, message.available_index)?;
    writer.write_u64_be(layout::GRANDMASTER_ID_RANGE, message.grandmaster_id)?;
    writer.write_u32_be(
        layout::DEFAULT_AUDIO_FORMAT_RANGE,
        message.default_audio_format.bits(),
    )?;
    writer.write_u32_be(
        layout::DEFAULT_VIDEO_FORMAT_RANGE,
        message.default_video_format,
    )?;
    writer.write_u64_be(layout::ASSOCIATION_ID_RANGE, message.association_id)?;
    writer.write_u32_be(layout::ENTITY_TYPE_RANGE, message.entity_type.bits())?;
    writer.write_slice(0, &header)
}
