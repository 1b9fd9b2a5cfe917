use super::Header;
use super::layout;
use crate::protocols::common::reader::PduReader;
use crate::protocols::common::writer::PduWriter;
use crate::protocols::error::CodecError;

/// Decode the 4-byte header shared by ADP, ACMP and AECP.
///
/// # Errors
/// `TruncatedPacket` when fewer than 4 bytes are available.
pub fn decode_header(payload: &[u8]) -> Result<Header, CodecError> {
    let reader = PduReader::new(payload);
    reader.require_len(layout::HEADER_LEN)?;

    let cd = reader.read_bits(layout::CD_SUBTYPE_OFFSET, layout::CD_BITS)? == 1;
    let subtype = reader.read_bits(layout::CD_SUBTYPE_OFFSET, layout::SUBTYPE_BITS)?;
    let sv = reader.read_bits(layout::SV_VERSION_TYPE_OFFSET, layout::SV_BITS)? == 1;
    let version = reader.read_bits(layout::SV_VERSION_TYPE_OFFSET, layout::VERSION_BITS)?;
    let message_type =
        reader.read_bits(layout::SV_VERSION_TYPE_OFFSET, layout::MESSAGE_TYPE_BITS)?;
    let valid_time =
        reader.read_bits(layout::VALID_TIME_LENGTH_HI_OFFSET, layout::VALID_TIME_BITS)?;
    let length_hi =
        reader.read_bits(layout::VALID_TIME_LENGTH_HI_OFFSET, layout::LENGTH_HI_BITS)?;
    let length_lo = reader.read_bits(layout::LENGTH_LO_OFFSET, layout::LENGTH_LO_BITS)?;

    Ok(Header {
        cd,
        subtype,
        sv,
        version,
        message_type,
        valid_time,
        data_length: (u16::from(length_hi) << 8) | u16::from(length_lo),
    })
}

/// Encode `header` into the first 4 bytes of `buf`.
///
/// Every field is validated before `buf` is touched; on error the buffer is
/// unchanged. Bytes after the header are left untouched.
///
/// # Errors
/// `ValueOutOfRange` when a field exceeds its bit width, `TruncatedPacket`
/// when `buf` is shorter than 4 bytes.
pub fn encode_header(header: &Header, buf: &mut [u8]) -> Result<(), CodecError> {
    let bytes = header_bytes(header)?;
    let mut writer = PduWriter::with_len(buf, layout::HEADER_LEN)?;
    writer.write_slice(layout::CD_SUBTYPE_OFFSET, &bytes)
}

/// Pack `header` into a standalone 4-byte array.
pub(crate) fn header_bytes(header: &Header) -> Result<[u8; layout::HEADER_LEN], CodecError> {
    if header.data_length > layout::MAX_DATA_LENGTH {
        return Err(CodecError::ValueOutOfRange {
            field: "data_length",
            value: u64::from(header.data_length),
            bits: 11,
        });
    }
    let [length_hi, length_lo] = header.data_length.to_be_bytes();

    let mut out = [0u8; layout::HEADER_LEN];
    let mut writer = PduWriter::new(&mut out);
    writer.write_bits(
        layout::CD_SUBTYPE_OFFSET,
        layout::CD_BITS,
        u8::from(header.cd),
        "cd",
    )?;
    writer.write_bits(
        layout::CD_SUBTYPE_OFFSET,
        layout::SUBTYPE_BITS,
        header.subtype,
        "subtype",
    )?;
    writer.write_bits(
        layout::SV_VERSION_TYPE_OFFSET,
        layout::SV_BITS,
        u8::from(header.sv),
        "sv",
    )?;
    writer.write_bits(
        layout::SV_VERSION_TYPE_OFFSET,
        layout::VERSION_BITS,
        header.version,
        "version",
    )?;
    writer.write_bits(
        layout::SV_VERSION_TYPE_OFFSET,
        layout::MESSAGE_TYPE_BITS,
        header.message_type,
        "message_type",
    )?;
    writer.write_bits(
        layout::VALID_TIME_LENGTH_HI_OFFSET,
        layout::VALID_TIME_BITS,
        header.valid_time,
        "valid_time",
    )?;
    writer.write_bits(
        layout::VALID_TIME_LENGTH_HI_OFFSET,
        layout::LENGTH_HI_BITS,
        length_hi,
        "data_length",
    )?;
    writer.write_bits(
        layout::LENGTH_LO_OFFSET,
        layout::LENGTH_LO_BITS,
        length_lo,
        "data_length",
    )?;
    Ok(out)
}
