use super::AecpMessage;
use super::layout;
use super::payload::AecpPayload;
use crate::protocols::common::writer::PduWriter;
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, control_header};

/// Encode an AECP PDU; the buffer is exactly as long as the message.
///
/// # Errors
/// `PayloadTooLarge` when the payload exceeds 514 bytes (or AV/C data
/// exceeds 512 bytes), `ValueOutOfRange` for a vendor protocol id wider than
/// 48 bits.
pub fn encode_aecp(message: &AecpMessage) -> Result<Vec<u8>, CodecError> {
    let payload_len = message.payload.encoded_len();
    if payload_len > layout::AECP_MAX_PAYLOAD_LEN {
        return Err(CodecError::PayloadTooLarge {
            size: payload_len,
            max: layout::AECP_MAX_PAYLOAD_LEN,
        });
    }
    let data_length = layout::PREFIX_DATA_LENGTH + payload_len as u16;
    let header = control_header(
        Subtype::Aecp,
        message.message_type().as_u8(),
        message.status.as_u8(),
        data_length,
    )
    .to_bytes()?;

    let mut buf = vec![0u8; layout::AECP_PREFIX_LEN + payload_len];
    let mut writer = PduWriter::new(&mut buf);
    writer.write_slice(0, &header)?;
    writer.write_u64_be(layout::TARGET_ENTITY_ID_RANGE, message.target_entity_id)?;
    writer.write_u64_be(
        layout::CONTROLLER_ENTITY_ID_RANGE,
        message.controller_entity_id,
    )?;
    writer.write_u16_be(layout::SEQUENCE_ID_RANGE, message.sequence_id)?;
    encode_payload(&message.payload, &mut buf[layout::PAYLOAD_OFFSET..])?;
    Ok(buf)
}

fn encode_payload(payload: &AecpPayload, body: &mut [u8]) -> Result<(), CodecError> {
    let mut writer = PduWriter::with_len(body, payload.encoded_len())?;
    match payload {
        AecpPayload::VendorMessage(msg) => {
            writer.write_u16_be(layout::MSG_MODE_LENGTH_RANGE, msg.mode_length)?;
            writer.write_u32_be(layout::MSG_OUI_RANGE, msg.oui)?;
            writer.write_u16_be(layout::MSG_OUI_FLAGS_RANGE, msg.oui_flags)?;
            writer.write_u16_be(layout::MSG_TYPE_CODE_FLAGS_RANGE, msg.type_code_flags)?;
            writer.write_u16_be(layout::MSG_INDEX0_RANGE, msg.index0)?;
            writer.write_u16_be(layout::MSG_SUBADDRESS_RANGE, msg.subaddress)?;
            writer.write_u16_be(layout::MSG_INDEX1_RANGE, msg.index1)?;
            writer.write_u16_be(layout::MSG_INDEX2_RANGE, msg.index2)?;
            writer.write_slice(layout::MSG_DATA_OFFSET, &msg.mode_specific_data)
        }
        AecpPayload::AddressAccess(access) => {
            writer.write_u16_be(layout::ADDRESS_MODE_LENGTH_RANGE, access.mode_length)?;
            writer.write_slice(layout::ADDRESS_DATA_OFFSET, &access.data)
        }
        AecpPayload::LegacyAvc(avc) => {
            if avc.avc_data.len() > layout::AVC_MAX_DATA_LEN {
                return Err(CodecError::PayloadTooLarge {
                    size: avc.avc_data.len(),
                    max: layout::AVC_MAX_DATA_LEN,
                });
            }
            writer.write_u16_be(layout::AVC_LENGTH_RANGE, avc.avc_data.len() as u16)?;
            writer.write_slice(layout::AVC_DATA_OFFSET, &avc.avc_data)
        }
        AecpPayload::VendorUnique(vendor) => {
            writer.write_u48_be(
                layout::VENDOR_PROTOCOL_ID_RANGE,
                vendor.protocol_id,
                "protocol_id",
            )?;
            writer.write_slice(layout::VENDOR_DATA_OFFSET, &vendor.payload)
        }
    }
}
