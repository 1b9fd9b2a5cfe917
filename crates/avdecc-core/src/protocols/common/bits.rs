//! Bit-field and big-endian primitives shared by every AVDECC codec.
//!
//! Bit positions are numbered from 0 (least significant) to 7 (most
//! significant). Multi-byte accessors never depend on host byte order.

use crate::protocols::error::CodecError;

/// Inclusive bit range `[lo, hi]` inside one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    lo: u8,
    hi: u8,
}

impl BitRange {
    /// Build a range; invalid ranges fail at compile time in `const` items.
    pub const fn new(lo: u8, hi: u8) -> Self {
        assert!(lo <= hi, "bit range must have lo <= hi");
        assert!(hi < 8, "bit range must stay within one byte");
        Self { lo, hi }
    }

    pub const fn width(self) -> u8 {
        self.hi - self.lo + 1
    }

    /// Largest value the range can hold.
    pub const fn max_value(self) -> u8 {
        (((1u16 << self.width()) - 1) & 0xff) as u8
    }

    const fn mask(self) -> u8 {
        self.max_value() << self.lo
    }
}

/// Extract the bits of `range` from `byte`.
///
/// # Examples
/// ```
/// use avdecc_core::bits::{BitRange, read_bits};
///
/// assert_eq!(read_bits(0b1011_0110, BitRange::new(4, 6)), 0b011);
/// ```
pub fn read_bits(byte: u8, range: BitRange) -> u8 {
    (byte & range.mask()) >> range.lo
}

/// Replace the bits of `range` in `byte` with `value`.
///
/// Values wider than the range are rejected instead of truncated.
///
/// # Errors
/// Returns `CodecError::ValueOutOfRange` when `value` needs more than
/// `range.width()` bits; `byte` is left untouched in that case.
pub fn write_bits(
    byte: &mut u8,
    range: BitRange,
    value: u8,
    field: &'static str,
) -> Result<(), CodecError> {
    if value > range.max_value() {
        return Err(CodecError::ValueOutOfRange {
            field,
            value: u64::from(value),
            bits: range.width(),
        });
    }
    *byte = (*byte & !range.mask()) | (value << range.lo);
    Ok(())
}

fn bytes_at<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], CodecError> {
    let end = offset.checked_add(N).ok_or(CodecError::TruncatedPacket {
        needed: usize::MAX,
        actual: buf.len(),
    })?;
    let slice = buf.get(offset..end).ok_or(CodecError::TruncatedPacket {
        needed: end,
        actual: buf.len(),
    })?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}

fn slot_at<const N: usize>(buf: &mut [u8], offset: usize) -> Result<&mut [u8], CodecError> {
    let actual = buf.len();
    let end = offset.checked_add(N).ok_or(CodecError::TruncatedPacket {
        needed: usize::MAX,
        actual,
    })?;
    buf.get_mut(offset..end)
        .ok_or(CodecError::TruncatedPacket { needed: end, actual })
}

pub fn read_be16(buf: &[u8], offset: usize) -> Result<u16, CodecError> {
    bytes_at::<2>(buf, offset).map(u16::from_be_bytes)
}

pub fn read_be32(buf: &[u8], offset: usize) -> Result<u32, CodecError> {
    bytes_at::<4>(buf, offset).map(u32::from_be_bytes)
}

/// Read a 48-bit big-endian value (MAC addresses, AECP protocol ids).
pub fn read_be48(buf: &[u8], offset: usize) -> Result<u64, CodecError> {
    let raw = bytes_at::<6>(buf, offset)?;
    let mut wide = [0u8; 8];
    wide[2..].copy_from_slice(&raw);
    Ok(u64::from_be_bytes(wide))
}

pub fn read_be64(buf: &[u8], offset: usize) -> Result<u64, CodecError> {
    bytes_at::<8>(buf, offset).map(u64::from_be_bytes)
}

pub fn write_be16(buf: &mut [u8], offset: usize, value: u16) -> Result<(), CodecError> {
    slot_at::<2>(buf, offset)?.copy_from_slice(&value.to_be_bytes());
    Ok(())
}

pub fn write_be32(buf: &mut [u8], offset: usize, value: u32) -> Result<(), CodecError> {
    slot_at::<4>(buf, offset)?.copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Write the low 48 bits of `value` big-endian.
///
/// # Errors
/// `ValueOutOfRange` if `value` has any of its top 16 bits set.
pub fn write_be48(
    buf: &mut [u8],
    offset: usize,
    value: u64,
    field: &'static str,
) -> Result<(), CodecError> {
    if value >> 48 != 0 {
        return Err(CodecError::ValueOutOfRange {
            field,
            value,
            bits: 48,
        });
    }
    slot_at::<6>(buf, offset)?.copy_from_slice(&value.to_be_bytes()[2..]);
    Ok(())
}

pub fn write_be64(buf: &mut [u8], offset: usize, value: u64) -> Result<(), CodecError> {
    slot_at::<8>(buf, offset)?.copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Check whether the first four bytes of `buf` are `value` in big-endian order.
///
/// Used for OUI matching; short buffers never match.
pub fn compare_be32(buf: &[u8], value: u32) -> bool {
    matches!(read_be32(buf, 0), Ok(found) if found == value)
}
