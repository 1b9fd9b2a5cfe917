//! AVDECC protocol codecs.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `parser`: decoding through the bounds-checked `PduReader`
//! - `encoder`: encoding through the width-checked `PduWriter`
//!
//! Codecs are pure and keep no state between calls. Which layout applies
//! to a buffer is decided by the header subtype alone.

pub mod acmp;
pub mod adp;
pub mod aecp;
pub mod common;
pub mod constants;
pub mod enums;
pub mod error;
pub mod header;

use serde::{Deserialize, Serialize};

use acmp::{AcmpMessage, decode_acmp, encode_acmp};
use adp::{AdpMessage, decode_adp, encode_adp};
use aecp::{AecpMessage, decode_aecp, encode_aecp};
use error::CodecError;
use header::{Subtype, decode_header};

/// Any AVDECC control message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", content = "message", rename_all = "lowercase")]
pub enum AvdeccMessage {
    Adp(AdpMessage),
    Acmp(AcmpMessage),
    Aecp(AecpMessage),
}

impl AvdeccMessage {
    pub fn subtype(&self) -> Subtype {
        match self {
            AvdeccMessage::Adp(_) => Subtype::Adp,
            AvdeccMessage::Acmp(_) => Subtype::Acmp,
            AvdeccMessage::Aecp(_) => Subtype::Aecp,
        }
    }

    /// Raw 4-bit message type as carried in the header.
    pub fn message_type(&self) -> u8 {
        match self {
            AvdeccMessage::Adp(msg) => msg.message_type.as_u8(),
            AvdeccMessage::Acmp(msg) => msg.message_type.as_u8(),
            AvdeccMessage::Aecp(msg) => msg.message_type().as_u8(),
        }
    }

    pub fn message_name(&self) -> &'static str {
        match self {
            AvdeccMessage::Adp(msg) => msg.message_type.name(),
            AvdeccMessage::Acmp(msg) => msg.message_type.name(),
            AvdeccMessage::Aecp(msg) => msg.message_type().name(),
        }
    }
}

/// Decode any AVDECC PDU, dispatching on the header subtype.
///
/// # Examples
/// ```
/// use avdecc_core::{AdpMessage, AvdeccMessage, decode_message, encode_adp};
///
/// let bytes = encode_adp(&AdpMessage::default())?;
/// assert!(matches!(decode_message(&bytes)?, AvdeccMessage::Adp(_)));
/// # Ok::<(), avdecc_core::CodecError>(())
/// ```
///
/// # Errors
/// `UnknownSubtype` when the subtype is not ADP, AECP or ACMP, plus any
/// error of the selected codec.
pub fn decode_message(payload: &[u8]) -> Result<AvdeccMessage, CodecError> {
    let header = decode_header(payload)?;
    match header.kind()? {
        Subtype::Adp => decode_adp(payload).map(AvdeccMessage::Adp),
        Subtype::Acmp => decode_acmp(payload).map(AvdeccMessage::Acmp),
        Subtype::Aecp => decode_aecp(payload).map(AvdeccMessage::Aecp),
    }
}

pub fn encode_message(message: &AvdeccMessage) -> Result<Vec<u8>, CodecError> {
    match message {
        AvdeccMessage::Adp(msg) => encode_adp(msg),
        AvdeccMessage::Acmp(msg) => encode_acmp(msg),
        AvdeccMessage::Aecp(msg) => encode_aecp(msg),
    }
}
