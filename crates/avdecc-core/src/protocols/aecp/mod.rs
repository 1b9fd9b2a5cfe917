//! AVDECC Enumeration and Control Protocol (AECP).
//!
//! A 22-byte prefix (header, target id, controller id, sequence id) is
//! followed by one of four payload shapes. The header message type alone
//! selects the shape; the extended pair (14/15) is recognised but rejected
//! with `UnsupportedVariant`.

pub mod encoder;
pub mod layout;
pub mod parser;
pub mod payload;

use serde::{Deserialize, Serialize};

use crate::protocols::enums::{AecpMessageType, AecpStatus};

pub use encoder::encode_aecp;
pub use layout::{AECP_MAX_PAYLOAD_LEN, AECP_MAX_PDU_LEN, AECP_PREFIX_LEN};
pub use parser::decode_aecp;
pub use payload::{AddressAccess, AecpPayload, LegacyAvc, VendorMessage, VendorUnique};

/// AECP command or response.
///
/// The wire message type is derived from `payload` and `response`, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AecpMessage {
    pub response: bool,
    pub status: AecpStatus,
    pub target_entity_id: u64,
    pub controller_entity_id: u64,
    pub sequence_id: u16,
    pub payload: AecpPayload,
}

impl AecpMessage {
    pub fn message_type(&self) -> AecpMessageType {
        self.payload.message_type(self.response)
    }
}
