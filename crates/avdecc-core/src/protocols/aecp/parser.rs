use tracing::trace;

use super::AecpMessage;
use super::layout;
use super::payload::{AddressAccess, AecpPayload, LegacyAvc, VendorMessage, VendorUnique};
use crate::protocols::common::reader::PduReader;
use crate::protocols::enums::{AecpMessageType, AecpStatus};
use crate::protocols::error::CodecError;
use crate::protocols::header::{Subtype, expect_subtype};

/// Decode an AECP PDU, selecting the payload shape from the message type.
///
/// The payload extent comes from the header data length, so trailing bytes
/// (for example Ethernet padding) are ignored.
///
/// # Errors
/// - `TruncatedPacket` when the buffer is shorter than the 22-byte prefix,
///   than the declared data length, or than the variant's fixed part.
/// - `UnsupportedVariant` for the extended message types 14/15.
/// - `UnknownMessageType` for 8..=13, `UnknownStatus` for statuses above 1.
/// - `InvalidDataLength` / `PayloadTooLarge` for impossible lengths.
pub fn decode_aecp(payload: &[u8]) -> Result<AecpMessage, CodecError> {
    let reader = PduReader::new(payload);
    reader.require_len(layout::AECP_PREFIX_LEN)?;
    let header = expect_subtype(payload, Subtype::Aecp)?;
    let message_type = AecpMessageType::try_from(header.message_type)?;
    if matches!(
        message_type,
        AecpMessageType::ExtendedCommand | AecpMessageType::ExtendedResponse
    ) {
        return Err(CodecError::UnsupportedVariant {
            message_type: message_type.as_u8(),
        });
    }
    let status = AecpStatus::try_from(header.valid_time)?;

    if header.data_length < layout::PREFIX_DATA_LENGTH {
        return Err(CodecError::InvalidDataLength {
            length: header.data_length,
        });
    }
    let payload_len = usize::from(header.data_length - layout::PREFIX_DATA_LENGTH);
    if payload_len > layout::AECP_MAX_PAYLOAD_LEN {
        return Err(CodecError::PayloadTooLarge {
            size: payload_len,
            max: layout::AECP_MAX_PAYLOAD_LEN,
        });
    }
    let end = layout::PAYLOAD_OFFSET + payload_len;
    reader.require_len(end)?;
    let body = reader.read_slice(layout::PAYLOAD_OFFSET..end)?;
    trace!(
        message_type = message_type.as_u8(),
        payload_len, "decoding AECP payload"
    );

    Ok(AecpMessage {
        response: message_type.is_response(),
        status,
        target_entity_id: reader.read_u64_be(layout::TARGET_ENTITY_ID_RANGE)?,
        controller_entity_id: reader.read_u64_be(layout::CONTROLLER_ENTITY_ID_RANGE)?,
        sequence_id: reader.read_u16_be(layout::SEQUENCE_ID_RANGE)?,
        payload: decode_payload(message_type, body)?,
    })
}

fn decode_payload(message_type: AecpMessageType, body: &[u8]) -> Result<AecpPayload, CodecError> {
    let reader = PduReader::new(body);
    match message_type {
        AecpMessageType::AvdeccMsgCommand | AecpMessageType::AvdeccMsgResponse => {
            reader.require_len(layout::MSG_DATA_OFFSET)?;
            Ok(AecpPayload::VendorMessage(VendorMessage {
                mode_length: reader.read_u16_be(layout::MSG_MODE_LENGTH_RANGE)?,
                oui: reader.read_u32_be(layout::MSG_OUI_RANGE)?,
                oui_flags: reader.read_u16_be(layout::MSG_OUI_FLAGS_RANGE)?,
                type_code_flags: reader.read_u16_be(layout::MSG_TYPE_CODE_FLAGS_RANGE)?,
                index0: reader.read_u16_be(layout::MSG_INDEX0_RANGE)?,
                subaddress: reader.read_u16_be(layout::MSG_SUBADDRESS_RANGE)?,
                index1: reader.read_u16_be(layout::MSG_INDEX1_RANGE)?,
                index2: reader.read_u16_be(layout::MSG_INDEX2_RANGE)?,
                mode_specific_data: reader
                    .read_slice(layout::MSG_DATA_OFFSET..body.len())?
                    .to_vec(),
            }))
        }
        AecpMessageType::AddressAccessCommand | AecpMessageType::AddressAccessResponse => {
            reader.require_len(layout::ADDRESS_DATA_OFFSET)?;
            Ok(AecpPayload::AddressAccess(AddressAccess {
                mode_length: reader.read_u16_be(layout::ADDRESS_MODE_LENGTH_RANGE)?,
                data: reader
                    .read_slice(layout::ADDRESS_DATA_OFFSET..body.len())?
                    .to_vec(),
            }))
        }
        AecpMessageType::AvcCommand | AecpMessageType::AvcResponse => {
            reader.require_len(layout::AVC_DATA_OFFSET)?;
            let length = usize::from(reader.read_u16_be(layout::AVC_LENGTH_RANGE)?);
            if length > layout::AVC_MAX_DATA_LEN {
                return Err(CodecError::PayloadTooLarge {
                    size: length,
                    max: layout::AVC_MAX_DATA_LEN,
                });
            }
            let end = layout::AVC_DATA_OFFSET + length;
            reader.require_len(end)?;
            if end != body.len() {
                return Err(CodecError::InvalidDataLength {
                    length: header_data_length(body.len()),
                });
            }
            Ok(AecpPayload::LegacyAvc(LegacyAvc {
                avc_data: reader.read_slice(layout::AVC_DATA_OFFSET..end)?.to_vec(),
            }))
        }
        AecpMessageType::VendorUniqueCommand | AecpMessageType::VendorUniqueResponse => {
            reader.require_len(layout::VENDOR_DATA_OFFSET)?;
            Ok(AecpPayload::VendorUnique(VendorUnique {
                protocol_id: reader.read_u48_be(layout::VENDOR_PROTOCOL_ID_RANGE)?,
                payload: reader
                    .read_slice(layout::VENDOR_DATA_OFFSET..body.len())?
                    .to_vec(),
            }))
        }
        AecpMessageType::ExtendedCommand | AecpMessageType::ExtendedResponse => {
            Err(CodecError::UnsupportedVariant {
                message_type: message_type.as_u8(),
            })
        }
    }
}

/// Header data length implied by an AECP payload of `payload_len` bytes.
fn header_data_length(payload_len: usize) -> u16 {
    layout::PREFIX_DATA_LENGTH + payload_len as u16
}
