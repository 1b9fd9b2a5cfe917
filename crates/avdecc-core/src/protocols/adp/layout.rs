use std::ops::Range;

pub const ENTITY_ID_RANGE: Range<usize> = 4..12;
pub const VENDOR_ID_RANGE: Range<usize> = 12..16;
pub const MODEL_ID_RANGE: Range<usize> = 16..20;
pub const ENTITY_CAPABILITIES_RANGE: Range<usize> = 20..24;
pub const TALKER_STREAM_SOURCES_RANGE: Range<usize> = 24..26;
pub const TALKER_CAPABILITIES_RANGE: Range<usize> = 26..28;
pub const LISTENER_STREAM_SINKS_RANGE: Range<usize> = 28..30;
pub const LISTENER_CAPABILITIES_RANGE: Range<usize> = 30..32;
pub const CONTROLLER_CAPABILITIES_RANGE: Range<usize> = 32..36;
pub const AVAILABLE_INDEX_RANGE: Range<usize> = 36..40;
pub const GRANDMASTER_ID_RANGE: Range<usize> = 40..48;
pub const DEFAULT_AUDIO_FORMAT_RANGE: Range<usize> = 48..52;
pub const DEFAULT_VIDEO_FORMAT_RANGE: Range<usize> = 52..56;
pub const ASSOCIATION_ID_RANGE: Range<usize> = 56..64;
pub const ENTITY_TYPE_RANGE: Range<usize> = 64..68;

pub const ADP_PDU_LEN: usize = 68;
/// Value of the header data length for an ADP PDU.
pub const ADP_DATA_LENGTH: u16 =
    (ADP_PDU_LEN - crate::protocols::header::layout::HEADER_LEN) as u16;
