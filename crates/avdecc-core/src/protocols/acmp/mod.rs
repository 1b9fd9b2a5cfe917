//! AVDECC Connection Management Protocol (ACMP).
//!
//! Fixed 56-byte layout; the header's valid-time slot carries the status.

pub mod encoder;
pub mod layout;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::protocols::constants::AcmpFlags;
use crate::protocols::enums::{AcmpMessageType, AcmpStatus};

pub use encoder::{encode_acmp, encode_acmp_into};
pub use layout::ACMP_PDU_LEN;
pub use parser::decode_acmp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcmpMessage {
    pub message_type: AcmpMessageType,
    pub status: AcmpStatus,
    pub stream_id: u64,
    pub controller_entity_id: u64,
    pub talker_entity_id: u64,
    pub listener_entity_id: u64,
    pub talker_unique_id: u16,
    pub listener_unique_id: u16,
    /// Stream destination MAC address.
    pub dest_mac: [u8; 6],
    pub connection_count: u16,
    pub sequence_id: u16,
    pub flags: AcmpFlags,
    pub default_format: u32,
}

impl Default for AcmpMessage {
    fn default() -> Self {
        Self {
            message_type: AcmpMessageType::ConnectRxCommand,
            status: AcmpStatus::Success,
            stream_id: 0,
            controller_entity_id: 0,
            talker_entity_id: 0,
            listener_entity_id: 0,
            talker_unique_id: 0,
            listener_unique_id: 0,
            dest_mac: [0; 6],
            connection_count: 0,
            sequence_id: 0,
            flags: AcmpFlags::empty(),
            default_format: 0,
        }
    }
}
