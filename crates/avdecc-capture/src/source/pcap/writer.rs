use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::PcapSourceError;
use super::layout;

/// Writes a big-endian PCAPNG stream with one Ethernet interface.
///
/// The section header and interface description are emitted by `new`;
/// every `write_packet` appends one enhanced packet block with a
/// microsecond timestamp.
pub struct PcapngWriter<W: Write> {
    out: W,
}

impl<W: Write> PcapngWriter<W> {
    pub fn new(mut out: W) -> Result<Self, PcapSourceError> {
        out.write_all(&block(layout::SECTION_HEADER_BLOCK, &section_header_body()))?;
        out.write_all(&block(
            layout::INTERFACE_DESCRIPTION_BLOCK,
            &interface_description_body(),
        ))?;
        Ok(Self { out })
    }

    pub fn write_packet(&mut self, ts_us: u64, data: &[u8]) -> Result<(), PcapSourceError> {
        let body = enhanced_packet_body(ts_us, data)?;
        self.out
            .write_all(&block(layout::ENHANCED_PACKET_BLOCK, &body))?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W, PcapSourceError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl PcapngWriter<BufWriter<File>> {
    /// Write `frames` (`(timestamp_us, frame)` pairs) to a new file at `path`.
    pub fn write_file(path: &Path, frames: &[(u64, Vec<u8>)]) -> Result<(), PcapSourceError> {
        let file = File::create(path)?;
        let mut writer = PcapngWriter::new(BufWriter::new(file))?;
        for (ts_us, data) in frames {
            writer.write_packet(*ts_us, data)?;
        }
        writer.into_inner()?;
        Ok(())
    }
}

fn block(block_type: u32, body: &[u8]) -> Vec<u8> {
    let total_len = (8 + body.len() + 4) as u32;
    let mut block = Vec::with_capacity(total_len as usize);
    block.extend_from_slice(&block_type.to_be_bytes());
    block.extend_from_slice(&total_len.to_be_bytes());
    block.extend_from_slice(body);
    block.extend_from_slice(&total_len.to_be_bytes());
    block
}

fn section_header_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&layout::BYTE_ORDER_MAGIC.to_be_bytes());
    body.extend_from_slice(&1u16.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    // Section length unknown.
    body.extend_from_slice(&(-1i64).to_be_bytes());
    body
}

fn interface_description_body() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&layout::LINKTYPE_ETHERNET.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&layout::SNAPLEN.to_be_bytes());
    body
}

fn enhanced_packet_body(ts_us: u64, data: &[u8]) -> Result<Vec<u8>, PcapSourceError> {
    let cap_len = u32::try_from(data.len())
        .ok()
        .filter(|len| *len <= layout::SNAPLEN)
        .ok_or_else(|| PcapSourceError::pcap("pcapng writer", "frame exceeds snaplen"))?;
    let ts_high = (ts_us >> 32) as u32;
    let ts_low = (ts_us & 0xffff_ffff) as u32;

    let mut body = Vec::with_capacity(20 + data.len() + 3);
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&ts_high.to_be_bytes());
    body.extend_from_slice(&ts_low.to_be_bytes());
    body.extend_from_slice(&cap_len.to_be_bytes());
    body.extend_from_slice(&cap_len.to_be_bytes());
    body.extend_from_slice(data);
    let pad_len = (4 - (data.len() % 4)) % 4;
    body.resize(body.len() + pad_len, 0);
    Ok(body)
}
