use std::ops::Range;

use super::bits::{self, BitRange};
use crate::protocols::error::CodecError;

/// Bounds-checked view over a received PDU.
///
/// Every accessor takes a layout range so parsers never index bytes
/// directly; a range past the end of the buffer yields `TruncatedPacket`.
pub struct PduReader<'a> {
    payload: &'a [u8],
}

impl<'a> PduReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), CodecError> {
        if self.payload.len() < needed {
            return Err(CodecError::TruncatedPacket {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, CodecError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(CodecError::TruncatedPacket {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_bits(&self, offset: usize, range: BitRange) -> Result<u8, CodecError> {
        self.read_u8(offset).map(|byte| bits::read_bits(byte, range))
    }

    pub fn read_u16_be(&self, range: Range<usize>) -> Result<u16, CodecError> {
        debug_assert_eq!(range.len(), 2);
        bits::read_be16(self.payload, range.start)
    }

    pub fn read_u32_be(&self, range: Range<usize>) -> Result<u32, CodecError> {
        debug_assert_eq!(range.len(), 4);
        bits::read_be32(self.payload, range.start)
    }

    pub fn read_u48_be(&self, range: Range<usize>) -> Result<u64, CodecError> {
        debug_assert_eq!(range.len(), 6);
        bits::read_be48(self.payload, range.start)
    }

    pub fn read_u64_be(&self, range: Range<usize>) -> Result<u64, CodecError> {
        debug_assert_eq!(range.len(), 8);
        bits::read_be64(self.payload, range.start)
    }

    pub fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], CodecError> {
        let bytes = self.read_slice(range)?;
        let mut out = [0u8; N];
        if bytes.len() != N {
            return Err(CodecError::TruncatedPacket {
                needed: N,
                actual: bytes.len(),
            });
        }
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], CodecError> {
        self.payload
            .get(range.clone())
            .ok_or(CodecError::TruncatedPacket {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::PduReader;
    use crate::protocols::common::bits::BitRange;
    use crate::protocols::error::CodecError;

    #[test]
    fn reads_fields_by_range() {
        let payload = [0x80, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let reader = PduReader::new(&payload);
        assert_eq!(reader.read_bits(0, BitRange::new(7, 7)).unwrap(), 1);
        assert_eq!(reader.read_u16_be(1..3).unwrap(), 0x0102);
        assert_eq!(reader.read_u32_be(4..8).unwrap(), 0x0405_0607);
        assert_eq!(reader.read_array::<2>(6..8).unwrap(), [0x06, 0x07]);
    }

    #[test]
    fn require_len_too_short() {
        let payload = [0u8; 3];
        let reader = PduReader::new(&payload);
        let err = reader.require_len(4).unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedPacket {
                needed: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn slice_past_end_is_truncation() {
        let payload = [0u8; 3];
        let reader = PduReader::new(&payload);
        assert!(matches!(
            reader.read_slice(1..5),
            Err(CodecError::TruncatedPacket { needed: 5, .. })
        ));
    }
}
