use std::io::{Read, Seek, SeekFrom};

use pcap_parser::Linktype;

use super::error::PcapSourceError;
use super::layout;

/// Read the magic bytes and rewind the reader to the start.
///
/// # Errors
/// Returns `PcapSourceError::Io` when the reader cannot be read or rewound.
pub fn read_magic_and_rewind<R: Read + Seek>(reader: &mut R) -> Result<[u8; 4], PcapSourceError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    reader.seek(SeekFrom::Start(0))?;
    Ok(magic)
}

pub fn is_pcapng_magic(magic: &[u8; 4]) -> bool {
    magic == &layout::PCAPNG_MAGIC
}

/// Per-interface state announced by a PCAPNG interface description block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceInfo {
    pub linktype: Linktype,
    /// Timestamp units per second.
    pub units_per_second: u64,
}

impl InterfaceInfo {
    pub fn new(linktype: Linktype, if_tsresol: u8) -> Self {
        Self {
            linktype,
            units_per_second: ts_units_per_second(if_tsresol),
        }
    }
}

/// Resolve the interface for `if_id`, defaulting to microsecond Ethernet.
pub fn interface_for_id(interfaces: &[InterfaceInfo], if_id: u32) -> InterfaceInfo {
    interfaces
        .get(if_id as usize)
        .copied()
        .unwrap_or_else(|| InterfaceInfo::new(Linktype::ETHERNET, layout::DEFAULT_TS_RESOLUTION))
}

/// Decode the PCAPNG `if_tsresol` option into units per second.
///
/// The high bit selects a power of two, otherwise a power of ten. A zero
/// byte (option absent) means microseconds. Exponents that overflow fall
/// back to microseconds.
pub fn ts_units_per_second(if_tsresol: u8) -> u64 {
    let exponent = u32::from(if_tsresol & 0x7f);
    let resolved = if if_tsresol == 0 {
        10u64.checked_pow(u32::from(layout::DEFAULT_TS_RESOLUTION))
    } else if if_tsresol & 0x80 != 0 {
        2u64.checked_pow(exponent)
    } else {
        10u64.checked_pow(exponent)
    };
    resolved.unwrap_or(1_000_000)
}

/// Convert a PCAPNG high/low timestamp to seconds.
pub fn pcapng_ts_to_seconds(ts_high: u32, ts_low: u32, units_per_second: u64) -> f64 {
    let ts = (u64::from(ts_high) << 32) | u64::from(ts_low);
    ts as f64 / units_per_second as f64
}

/// Convert a legacy PCAP timestamp to seconds.
pub fn legacy_ts_to_seconds(ts_sec: u32, ts_frac: u32, nanosecond: bool) -> f64 {
    let scale = if nanosecond { 1e-9 } else { 1e-6 };
    f64::from(ts_sec) + f64::from(ts_frac) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn detect_pcapng_magic() {
        assert!(is_pcapng_magic(&layout::PCAPNG_MAGIC));
        assert!(!is_pcapng_magic(&[0xd4, 0xc3, 0xb2, 0xa1]));
    }

    #[test]
    fn read_magic_rewinds() {
        let bytes = [0x0a, 0x0d, 0x0d, 0x0a, 0x01];
        let mut cursor = Cursor::new(bytes);
        let magic = read_magic_and_rewind(&mut cursor).unwrap();
        assert_eq!(magic, layout::PCAPNG_MAGIC);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn read_magic_too_short() {
        let mut cursor = Cursor::new([0x0a, 0x0d, 0x0d]);
        let err = read_magic_and_rewind(&mut cursor).unwrap_err();
        assert!(matches!(err, PcapSourceError::Io(_)));
    }

    #[test]
    fn unknown_interface_defaults_to_ethernet_microseconds() {
        let interfaces = [InterfaceInfo::new(Linktype::RAW, 9)];
        assert_eq!(interface_for_id(&interfaces, 0).linktype, Linktype::RAW);
        let fallback = interface_for_id(&interfaces, 3);
        assert_eq!(fallback.linktype, Linktype::ETHERNET);
        assert_eq!(fallback.units_per_second, 1_000_000);
    }

    #[test]
    fn timestamp_resolution_variants() {
        assert_eq!(ts_units_per_second(0), 1_000_000);
        assert_eq!(ts_units_per_second(6), 1_000_000);
        assert_eq!(ts_units_per_second(9), 1_000_000_000);
        assert_eq!(ts_units_per_second(0x80 | 10), 1024);
        assert_eq!(ts_units_per_second(0x7f), 1_000_000);
    }

    #[test]
    fn timestamps_convert_to_seconds() {
        let seconds = pcapng_ts_to_seconds(0, 1_500_000, 1_000_000);
        assert!((seconds - 1.5).abs() < f64::EPSILON);
        let seconds = legacy_ts_to_seconds(2, 250_000_000, true);
        assert!((seconds - 2.25).abs() < f64::EPSILON);
    }
}
