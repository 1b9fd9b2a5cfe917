use std::ops::Range;

pub const STREAM_ID_RANGE: Range<usize> = 4..12;
pub const CONTROLLER_ENTITY_ID_RANGE: Range<usize> = 12..20;
pub const TALKER_ENTITY_ID_RANGE: Range<usize> = 20..28;
pub const LISTENER_ENTITY_ID_RANGE: Range<usize> = 28..36;
pub const TALKER_UNIQUE_ID_RANGE: Range<usize> = 36..38;
pub const LISTENER_UNIQUE_ID_RANGE: Range<usize> = 38..40;
pub const DEST_MAC_RANGE: Range<usize> = 40..46;
pub const CONNECTION_COUNT_RANGE: Range<usize> = 46..48;
pub const SEQUENCE_ID_RANGE: Range<usize> = 48..50;
pub const FLAGS_RANGE: Range<usize> = 50..52;
pub const DEFAULT_FORMAT_RANGE: Range<usize> = 52..56;

pub const ACMP_PDU_LEN: usize = 56;
pub const ACMP_DATA_LENGTH: u16 =
    (ACMP_PDU_LEN - crate::protocols::header::layout::HEADER_LEN) as u16;
