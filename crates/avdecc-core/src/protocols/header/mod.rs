//! Common AVTP control header.
//!
//! ```text
//!  byte 0: cd(1) | subtype(7)
//!  byte 1: sv(1) | version(3) | message_type(4)
//!  byte 2: valid_time / status(5) | data_length[10:8](3)
//!  byte 3: data_length[7:0]
//! ```
//!
//! The 11-bit data length straddles bytes 2 and 3 and is always handled as a
//! single field.

pub mod layout;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::protocols::constants::{ACMP_SUBTYPE, ADP_SUBTYPE, AECP_SUBTYPE};
use crate::protocols::error::CodecError;

pub use parser::{decode_header, encode_header};

/// Decoded header fields, each held in its own integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub cd: bool,
    pub subtype: u8,
    pub sv: bool,
    pub version: u8,
    pub message_type: u8,
    /// ADP valid time; carries the status code for ACMP and AECP.
    pub valid_time: u8,
    /// Number of bytes following the header.
    pub data_length: u16,
}

impl Header {
    pub fn to_bytes(&self) -> Result<[u8; layout::HEADER_LEN], CodecError> {
        parser::header_bytes(self)
    }

    /// Classify the subtype.
    pub fn kind(&self) -> Result<Subtype, CodecError> {
        Subtype::try_from(self.subtype)
    }
}

/// Which AVDECC layout a buffer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subtype {
    Adp,
    Aecp,
    Acmp,
}

impl Subtype {
    pub const fn as_u8(self) -> u8 {
        match self {
            Subtype::Adp => ADP_SUBTYPE,
            Subtype::Aecp => AECP_SUBTYPE,
            Subtype::Acmp => ACMP_SUBTYPE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Subtype::Adp => "adp",
            Subtype::Aecp => "aecp",
            Subtype::Acmp => "acmp",
        }
    }
}

impl TryFrom<u8> for Subtype {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            ADP_SUBTYPE => Ok(Subtype::Adp),
            AECP_SUBTYPE => Ok(Subtype::Aecp),
            ACMP_SUBTYPE => Ok(Subtype::Acmp),
            _ => Err(CodecError::UnknownSubtype { value }),
        }
    }
}

/// Build the header every encoder emits for `subtype`.
pub(crate) fn control_header(
    subtype: Subtype,
    message_type: u8,
    valid_time: u8,
    data_length: u16,
) -> Header {
    Header {
        cd: crate::protocols::constants::DEFAULT_CD_FLAG,
        subtype: subtype.as_u8(),
        sv: false,
        version: crate::protocols::constants::DEFAULT_AVB_VERSION,
        message_type,
        valid_time,
        data_length,
    }
}

/// Decode the header and require a specific subtype.
pub(crate) fn expect_subtype(payload: &[u8], expected: Subtype) -> Result<Header, CodecError> {
    let header = decode_header(payload)?;
    if header.subtype != expected.as_u8() {
        return Err(CodecError::SubtypeMismatch {
            expected: expected.as_u8(),
            found: header.subtype,
        });
    }
    Ok(header)
}
