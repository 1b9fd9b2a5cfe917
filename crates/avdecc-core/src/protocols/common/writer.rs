use std::ops::Range;

use super::bits::{self, BitRange};
use crate::protocols::error::CodecError;

/// Bounds-checked writer over an outgoing PDU buffer.
///
/// Mirrors `PduReader`: fields are addressed by layout ranges and every
/// value is checked against its declared width before it is stored.
pub struct PduWriter<'a> {
    buf: &'a mut [u8],
}

impl<'a> PduWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    /// Wrap `buf` after checking it can hold `needed` bytes.
    pub fn with_len(buf: &'a mut [u8], needed: usize) -> Result<Self, CodecError> {
        if buf.len() < needed {
            return Err(CodecError::TruncatedPacket {
                needed,
                actual: buf.len(),
            });
        }
        Ok(Self::new(buf))
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), CodecError> {
        let actual = self.buf.len();
        let slot = self.buf.get_mut(offset).ok_or(CodecError::TruncatedPacket {
            needed: offset + 1,
            actual,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn write_bits(
        &mut self,
        offset: usize,
        range: BitRange,
        value: u8,
        field: &'static str,
    ) -> Result<(), CodecError> {
        let actual = self.buf.len();
        let slot = self.buf.get_mut(offset).ok_or(CodecError::TruncatedPacket {
            needed: offset + 1,
            actual,
        })?;
        bits::write_bits(slot, range, value, field)
    }

    pub fn write_u16_be(&mut self, range: Range<usize>, value: u16) -> Result<(), CodecError> {
        debug_assert_eq!(range.len(), 2);
        bits::write_be16(self.buf, range.start, value)
    }

    pub fn write_u32_be(&mut self, range: Range<usize>, value: u32) -> Result<(), CodecError> {
        debug_assert_eq!(range.len(), 4);
        bits::write_be32(self.buf, range.start, value)
    }

    pub fn write_u48_be(
        &mut self,
        range: Range<usize>,
        value: u64,
        field: &'static str,
    ) -> Result<(), CodecError> {
        debug_assert_eq!(range.len(), 6);
        bits::write_be48(self.buf, range.start, value, field)
    }

    pub fn write_u64_be(&mut self, range: Range<usize>, value: u64) -> Result<(), CodecError> {
        debug_assert_eq!(range.len(), 8);
        bits::write_be64(self.buf, range.start, value)
    }

    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Result<(), CodecError> {
        let actual = self.buf.len();
        let end = offset + data.len();
        self.buf
            .get_mut(offset..end)
            .ok_or(CodecError::TruncatedPacket {
                needed: end,
                actual,
            })?
            .copy_from_slice(data);
        Ok(())
    }
}
