use crate::protocols::common::bits::BitRange;

pub const CD_SUBTYPE_OFFSET: usize = 0;
pub const SV_VERSION_TYPE_OFFSET: usize = 1;
pub const VALID_TIME_LENGTH_HI_OFFSET: usize = 2;
pub const LENGTH_LO_OFFSET: usize = 3;

pub const CD_BITS: BitRange = BitRange::new(7, 7);
pub const SUBTYPE_BITS: BitRange = BitRange::new(0, 6);
pub const SV_BITS: BitRange = BitRange::new(7, 7);
pub const VERSION_BITS: BitRange = BitRange::new(4, 6);
pub const MESSAGE_TYPE_BITS: BitRange = BitRange::new(0, 3);
pub const VALID_TIME_BITS: BitRange = BitRange::new(3, 7);
pub const LENGTH_HI_BITS: BitRange = BitRange::new(0, 2);
pub const LENGTH_LO_BITS: BitRange = BitRange::new(0, 7);

pub const HEADER_LEN: usize = 4;
/// Largest value of the 11-bit data length field.
pub const MAX_DATA_LENGTH: u16 = 0x07ff;
