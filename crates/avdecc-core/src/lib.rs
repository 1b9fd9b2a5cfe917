//! AVDECC (IEEE 1722.1) control-plane wire codec.
//!
//! The codec packs and unpacks the three AVDECC protocols carried over AVTP
//! (EtherType `0x22F0`): Discovery (ADP), Connection Management (ACMP) and
//! Enumeration/Control (AECP). Every protocol follows the same layering:
//! `layout` (offsets as source of truth) -> bounds-checked reader/writer ->
//! parser/encoder. Codecs are pure functions over byte slices with no I/O
//! and no state between calls.
//!
//! Invariants:
//! - Encoders reject values wider than their field instead of truncating.
//! - Decoders never read past the buffer; short input is `TruncatedPacket`.
//! - A failed encode leaves the caller's buffer untouched.
//!
//! # Examples
//! ```
//! use avdecc_core::{AdpMessage, ControllerCapabilities, decode_adp, encode_adp};
//!
//! let msg = AdpMessage {
//!     entity_id: 0x0001_f2ff_fe00_1234,
//!     valid_time: 31,
//!     controller_capabilities: ControllerCapabilities::IMPLEMENTED,
//!     ..AdpMessage::default()
//! };
//! let bytes = encode_adp(&msg)?;
//! assert_eq!(bytes.len(), avdecc_core::ADP_PDU_LEN);
//! assert_eq!(decode_adp(&bytes)?, msg);
//! # Ok::<(), avdecc_core::CodecError>(())
//! ```

mod protocols;

pub use protocols::acmp::{ACMP_PDU_LEN, AcmpMessage, decode_acmp, encode_acmp, encode_acmp_into};
pub use protocols::adp::{ADP_PDU_LEN, AdpMessage, decode_adp, encode_adp, encode_adp_into};
pub use protocols::aecp::{
    AECP_MAX_PAYLOAD_LEN, AECP_MAX_PDU_LEN, AECP_PREFIX_LEN, AddressAccess, AecpMessage,
    AecpPayload, LegacyAvc, VendorMessage, VendorUnique, decode_aecp, encode_aecp,
};
pub use protocols::common::bits;
pub use protocols::constants::{
    ACMP_SUBTYPE, ADP_SUBTYPE, AECP_SUBTYPE, AVTP_ETHERTYPE, AcmpFlags, AudioFormats,
    ControllerCapabilities, DEFAULT_AVB_VERSION, DEFAULT_CD_FLAG, EntityCapabilities, EntityType,
    ListenerCapabilities, TalkerCapabilities,
};
pub use protocols::enums::{
    AcmpMessageType, AcmpStatus, AdpMessageType, AecpMessageType, AecpStatus,
};
pub use protocols::error::CodecError;
pub use protocols::header::{Header, Subtype, decode_header, encode_header};
pub use protocols::{AvdeccMessage, decode_message, encode_message};
