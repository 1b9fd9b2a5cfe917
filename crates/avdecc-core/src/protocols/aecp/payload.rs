//! The four AECP payload shapes.

use serde::{Deserialize, Serialize};

use super::layout;
use crate::protocols::enums::AecpMessageType;

/// AVDECC message payload (message types 0/1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorMessage {
    /// Mode/length byte pair, carried verbatim.
    pub mode_length: u16,
    pub oui: u32,
    pub oui_flags: u16,
    pub type_code_flags: u16,
    pub index0: u16,
    pub subaddress: u16,
    pub index1: u16,
    pub index2: u16,
    pub mode_specific_data: Vec<u8>,
}

/// Address access payload (message types 2/3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressAccess {
    pub mode_length: u16,
    pub data: Vec<u8>,
}

/// Legacy AV/C command payload (message types 4/5).
///
/// The 16-bit length prefix is derived from `avc_data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyAvc {
    pub avc_data: Vec<u8>,
}

/// Vendor unique payload (message types 6/7).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorUnique {
    /// 48-bit protocol identifier.
    pub protocol_id: u64,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AecpPayload {
    VendorMessage(VendorMessage),
    AddressAccess(AddressAccess),
    LegacyAvc(LegacyAvc),
    VendorUnique(VendorUnique),
}

impl AecpPayload {
    /// Message type carrying this payload as a command or a response.
    pub fn message_type(&self, response: bool) -> AecpMessageType {
        match (self, response) {
            (AecpPayload::VendorMessage(_), false) => AecpMessageType::AvdeccMsgCommand,
            (AecpPayload::VendorMessage(_), true) => AecpMessageType::AvdeccMsgResponse,
            (AecpPayload::AddressAccess(_), false) => AecpMessageType::AddressAccessCommand,
            (AecpPayload::AddressAccess(_), true) => AecpMessageType::AddressAccessResponse,
            (AecpPayload::LegacyAvc(_), false) => AecpMessageType::AvcCommand,
            (AecpPayload::LegacyAvc(_), true) => AecpMessageType::AvcResponse,
            (AecpPayload::VendorUnique(_), false) => AecpMessageType::VendorUniqueCommand,
            (AecpPayload::VendorUnique(_), true) => AecpMessageType::VendorUniqueResponse,
        }
    }

    /// Size of the fixed part that precedes the variable data.
    pub fn fixed_len(&self) -> usize {
        match self {
            AecpPayload::VendorMessage(_) => layout::MSG_DATA_OFFSET,
            AecpPayload::AddressAccess(_) => layout::ADDRESS_DATA_OFFSET,
            AecpPayload::LegacyAvc(_) => layout::AVC_DATA_OFFSET,
            AecpPayload::VendorUnique(_) => layout::VENDOR_DATA_OFFSET,
        }
    }

    /// Number of bytes the payload occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        let variable = match self {
            AecpPayload::VendorMessage(msg) => msg.mode_specific_data.len(),
            AecpPayload::AddressAccess(access) => access.data.len(),
            AecpPayload::LegacyAvc(avc) => avc.avc_data.len(),
            AecpPayload::VendorUnique(vendor) => vendor.payload.len(),
        };
        self.fixed_len() + variable
    }

    pub fn name(&self) -> &'static str {
        match self {
            AecpPayload::VendorMessage(_) => "vendor_message",
            AecpPayload::AddressAccess(_) => "address_access",
            AecpPayload::LegacyAvc(_) => "legacy_avc",
            AecpPayload::VendorUnique(_) => "vendor_unique",
        }
    }
}
