//! Subtypes, protocol defaults and capability/format bitmasks.
//!
//! Bitmask fields decode with `from_bits_retain`, so bits this table does not
//! name survive a decode/encode cycle untouched.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// EtherType carrying AVTP (and therefore AVDECC) frames.
pub const AVTP_ETHERTYPE: u16 = 0x22f0;

pub const ADP_SUBTYPE: u8 = 0x7a;
pub const AECP_SUBTYPE: u8 = 0x7b;
pub const ACMP_SUBTYPE: u8 = 0x7c;

/// Control/data flag emitted by every encoder.
pub const DEFAULT_CD_FLAG: bool = true;
/// AVTP version emitted by every encoder.
pub const DEFAULT_AVB_VERSION: u8 = 0;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EntityCapabilities: u32 {
        const AVDECC_IP = 0x0000_0001;
        const ZERO_CONF = 0x0000_0002;
        const GATEWAY_ENTITY = 0x0000_0004;
        const AVDECC_CONTROL = 0x0000_0008;
        const LEGACY_AVC = 0x0000_0010;
        const ASSOCIATION_ID_SUPPORTED = 0x0000_0020;
        const ASSOCIATION_ID_VALID = 0x0000_0040;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct TalkerCapabilities: u16 {
        const IMPLEMENTED = 0x0001;
        const OTHER_SOURCE = 0x0200;
        const CONTROL_SOURCE = 0x0400;
        const MEDIA_CLOCK_SOURCE = 0x0800;
        const SMPTE_SOURCE = 0x1000;
        const MIDI_SOURCE = 0x2000;
        const AUDIO_SOURCE = 0x4000;
        const VIDEO_SOURCE = 0x8000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ListenerCapabilities: u16 {
        const IMPLEMENTED = 0x0001;
        const OTHER_SINK = 0x0200;
        const CONTROL_SINK = 0x0400;
        const MEDIA_CLOCK_SINK = 0x0800;
        const SMPTE_SINK = 0x1000;
        const MIDI_SINK = 0x2000;
        const AUDIO_SINK = 0x4000;
        const VIDEO_SINK = 0x8000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ControllerCapabilities: u32 {
        const IMPLEMENTED = 0x0001;
        const LAYER3_PROXY = 0x0002;
    }
}

bitflags! {
    /// Default audio format: channel counts, sample formats, stream limits
    /// and sample rates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AudioFormats: u32 {
        const MONO = 0x0000_0001;
        const CH_2 = 0x0000_0002;
        const CH_3 = 0x0000_0004;
        const CH_4 = 0x0000_0008;
        const CH_5 = 0x0000_0010;
        const CH_6 = 0x0000_0020;
        const CH_7 = 0x0000_0040;
        const CH_8 = 0x0000_0080;
        const CH_10 = 0x0000_0100;
        const CH_12 = 0x0000_0200;
        const CH_14 = 0x0000_0400;
        const CH_16 = 0x0000_0800;
        const CH_18 = 0x0000_1000;
        const CH_20 = 0x0000_2000;
        const CH_22 = 0x0000_4000;
        const CH_24 = 0x0000_8000;
        const FLOAT = 0x0001_0000;
        const SAF = 0x0002_0000;
        const MAX_STREAMS_4 = 0x0010_0000;
        const MAX_STREAMS_8 = 0x0020_0000;
        const MAX_STREAMS_16 = 0x0040_0000;
        const RATE_44K1 = 0x0400_0000;
        const RATE_48K = 0x0800_0000;
        const RATE_88K2 = 0x1000_0000;
        const RATE_96K = 0x2000_0000;
        const RATE_176K4 = 0x4000_0000;
        const RATE_192K = 0x8000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EntityType: u32 {
        const OTHER = 0x0000_0001;
        const MULTIFUNCTION = 0x0000_0002;
        const LOUDSPEAKER = 0x0000_0004;
        const MICROPHONE = 0x0000_0008;
        const AUDIO_AMPLIFIER = 0x0000_0010;
        const AUDIO_SOURCE = 0x0000_0020;
        const AUDIO_PROCESSOR = 0x0000_0040;
        const AUDIO_MIXER = 0x0000_0080;
        const HEADSET = 0x0000_0100;
        const COMPUTER = 0x0000_0200;
        const MUSICAL_INSTRUMENT = 0x0000_0400;
        const MIDI_DEVICE = 0x0000_0800;
        const MEDIA_SERVER = 0x0000_1000;
        const MEDIA_RECORDER = 0x0000_2000;
        const VIDEO_SOURCE = 0x0000_4000;
        const VIDEO_DISPLAY = 0x0000_8000;
        const VIDEO_PROCESSOR = 0x0001_0000;
        const VIDEO_MIXER = 0x0002_0000;
        const TIMING_DEVICE = 0x0004_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AcmpFlags: u16 {
        const CLASS_B = 0x0001;
        const FAST_CONNECT = 0x0002;
        const SAVED_STATE = 0x0004;
        const STREAMING_WAIT = 0x0008;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_capability_literals() {
        assert_eq!(ControllerCapabilities::IMPLEMENTED.bits(), 0x0001);
        assert_eq!(ControllerCapabilities::LAYER3_PROXY.bits(), 0x0002);
        let both = ControllerCapabilities::IMPLEMENTED | ControllerCapabilities::LAYER3_PROXY;
        assert_eq!(both.bits(), 0x0003);
    }

    #[test]
    fn unknown_bits_are_retained() {
        let flags = AcmpFlags::from_bits_retain(0x8001);
        assert!(flags.contains(AcmpFlags::CLASS_B));
        assert_eq!(flags.bits(), 0x8001);
    }

    #[test]
    fn audio_rates_occupy_top_bits() {
        assert_eq!(AudioFormats::RATE_192K.bits(), 0x8000_0000);
        assert_eq!(AudioFormats::RATE_48K.bits(), 0x0800_0000);
    }
}
