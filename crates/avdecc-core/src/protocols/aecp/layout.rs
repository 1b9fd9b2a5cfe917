use std::ops::Range;

pub const TARGET_ENTITY_ID_RANGE: Range<usize> = 4..12;
pub const CONTROLLER_ENTITY_ID_RANGE: Range<usize> = 12..20;
pub const SEQUENCE_ID_RANGE: Range<usize> = 20..22;
pub const PAYLOAD_OFFSET: usize = 22;

/// Header, target id, controller id and sequence id.
pub const AECP_PREFIX_LEN: usize = PAYLOAD_OFFSET;
/// Data length of an AECP PDU with an empty payload.
pub const PREFIX_DATA_LENGTH: u16 =
    (AECP_PREFIX_LEN - crate::protocols::header::layout::HEADER_LEN) as u16;
pub const AECP_MAX_PAYLOAD_LEN: usize = 514;
pub const AECP_MAX_PDU_LEN: usize = AECP_PREFIX_LEN + AECP_MAX_PAYLOAD_LEN;

// Offsets below are relative to the start of the payload.

pub const MSG_MODE_LENGTH_RANGE: Range<usize> = 0..2;
pub const MSG_OUI_RANGE: Range<usize> = 2..6;
pub const MSG_OUI_FLAGS_RANGE: Range<usize> = 6..8;
pub const MSG_TYPE_CODE_FLAGS_RANGE: Range<usize> = 8..10;
pub const MSG_INDEX0_RANGE: Range<usize> = 10..12;
pub const MSG_SUBADDRESS_RANGE: Range<usize> = 12..14;
pub const MSG_INDEX1_RANGE: Range<usize> = 14..16;
pub const MSG_INDEX2_RANGE: Range<usize> = 16..18;
pub const MSG_DATA_OFFSET: usize = 18;

pub const ADDRESS_MODE_LENGTH_RANGE: Range<usize> = 0..2;
pub const ADDRESS_DATA_OFFSET: usize = 2;

pub const AVC_LENGTH_RANGE: Range<usize> = 0..2;
pub const AVC_DATA_OFFSET: usize = 2;
pub const AVC_MAX_DATA_LEN: usize = 512;

pub const VENDOR_PROTOCOL_ID_RANGE: Range<usize> = 0..6;
pub const VENDOR_DATA_OFFSET: usize = 6;
