//! PCAP/PCAPNG source implementation.
//!
//! `PcapFileSource` reads either container format and emits raw frames;
//! `PcapngWriter` produces single-interface Ethernet captures, used to build
//! fixtures.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use parser::PcapFileSource;
pub use writer::PcapngWriter;
