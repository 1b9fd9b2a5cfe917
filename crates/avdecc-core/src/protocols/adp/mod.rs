//! AVDECC Discovery Protocol (ADP).
//!
//! An ADP PDU is the common header followed by fifteen fixed-offset fields;
//! nothing past the header is bit-packed. Offsets live in `layout`.

pub mod encoder;
pub mod layout;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::protocols::constants::{
    AudioFormats, ControllerCapabilities, EntityCapabilities, EntityType, ListenerCapabilities,
    TalkerCapabilities,
};
use crate::protocols::enums::AdpMessageType;

pub use encoder::{encode_adp, encode_adp_into};
pub use layout::ADP_PDU_LEN;
pub use parser::decode_adp;

/// Entity advertisement, departure or discovery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdpMessage {
    pub message_type: AdpMessageType,
    /// Advertisement lifetime, 5 bits.
    pub valid_time: u8,
    pub entity_id: u64,
    pub vendor_id: u32,
    pub model_id: u32,
    pub entity_capabilities: EntityCapabilities,
    pub talker_stream_sources: u16,
    pub talker_capabilities: TalkerCapabilities,
    pub listener_stream_sinks: u16,
    pub listener_capabilities: ListenerCapabilities,
    pub controller_capabilities: ControllerCapabilities,
    /// Incremented by the entity on every advertisement.
    pub available_index: u32,
    pub grandmaster_id: u64,
    pub default_audio_format: AudioFormats,
    pub default_video_format: u32,
    pub association_id: u64,
    pub entity_type: EntityType,
}

impl Default for AdpMessage {
    fn default() -> Self {
        Self {
            message_type: AdpMessageType::EntityAvailable,
            valid_time: 0,
            entity_id: 0,
            vendor_id: 0,
            model_id: 0,
            entity_capabilities: EntityCapabilities::empty(),
            talker_stream_sources: 0,
            talker_capabilities: TalkerCapabilities::empty(),
            listener_stream_sinks: 0,
            listener_capabilities: ListenerCapabilities::empty(),
            controller_capabilities: ControllerCapabilities::empty(),
            available_index: 0,
            grandmaster_id: 0,
            default_audio_format: AudioFormats::empty(),
            default_video_format: 0,
            association_id: 0,
            entity_type: EntityType::empty(),
        }
    }
}
