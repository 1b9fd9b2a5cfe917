pub const PCAPNG_MAGIC: [u8; 4] = [0x0a, 0x0d, 0x0d, 0x0a];
pub const PCAP_READER_BUFFER_SIZE: usize = 64 * 1024;

pub const SECTION_HEADER_BLOCK: u32 = 0x0a0d_0d0a;
pub const INTERFACE_DESCRIPTION_BLOCK: u32 = 0x0000_0001;
pub const ENHANCED_PACKET_BLOCK: u32 = 0x0000_0006;
pub const BYTE_ORDER_MAGIC: u32 = 0x1a2b_3c4d;
pub const LINKTYPE_ETHERNET: u16 = 1;
pub const SNAPLEN: u32 = 65_535;

/// PCAPNG default timestamp resolution (`if_tsresol` = 6).
pub const DEFAULT_TS_RESOLUTION: u8 = 6;
