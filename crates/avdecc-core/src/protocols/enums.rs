//! Message-type and status enumerations for ADP, ACMP and AECP.
//!
//! Conversions from raw numbers are explicit (`TryFrom<u8>`): a value outside
//! the enumeration is an error, never a silently chosen variant.

use serde::{Deserialize, Serialize};

use super::constants::{ACMP_SUBTYPE, ADP_SUBTYPE, AECP_SUBTYPE};
use super::error::CodecError;

/// Generates the enum, `as_u8`, `name` and the fallible `TryFrom<u8>`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $subtype:expr, $error:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            pub const fn as_u8(self) -> u8 {
                self as u8
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = CodecError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(CodecError::$error {
                        subtype: $subtype,
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.as_u8()
            }
        }
    };
}

wire_enum! {
    /// ADP message types.
    AdpMessageType, ADP_SUBTYPE, UnknownMessageType {
        EntityAvailable = 0,
        EntityDeparting = 1,
        EntityDiscover = 2,
    }
}

wire_enum! {
    /// ACMP command/response message types.
    AcmpMessageType, ACMP_SUBTYPE, UnknownMessageType {
        ConnectTxCommand = 0,
        ConnectTxResponse = 1,
        DisconnectTxCommand = 2,
        DisconnectTxResponse = 3,
        GetTxStateCommand = 4,
        GetTxStateResponse = 5,
        ConnectRxCommand = 6,
        ConnectRxResponse = 7,
        DisconnectRxCommand = 8,
        DisconnectRxResponse = 9,
        GetRxStateCommand = 10,
        GetRxStateResponse = 11,
        GetTxConnectionCommand = 12,
        GetTxConnectionResponse = 13,
    }
}

wire_enum! {
    /// ACMP status codes. 16..=30 are reserved and rejected.
    AcmpStatus, ACMP_SUBTYPE, UnknownStatus {
        Success = 0,
        ListenerUnknownId = 1,
        TalkerUnknownId = 2,
        TalkerDestMacFail = 3,
        TalkerNoStreamIndex = 4,
        TalkerNoBandwidth = 5,
        TalkerExclusive = 6,
        ListenerTalkerTimeout = 7,
        ListenerExclusive = 8,
        StateUnavailable = 9,
        NotConnected = 10,
        NoSuchConnection = 11,
        CouldNotSendMessage = 12,
        ListenerDefaultFormatInvalid = 13,
        TalkerDefaultFormatInvalid = 14,
        DefaultSetDifferent = 15,
        NotSupported = 31,
    }
}

wire_enum! {
    /// AECP message types, including the reserved extended pair.
    AecpMessageType, AECP_SUBTYPE, UnknownMessageType {
        AvdeccMsgCommand = 0,
        AvdeccMsgResponse = 1,
        AddressAccessCommand = 2,
        AddressAccessResponse = 3,
        AvcCommand = 4,
        AvcResponse = 5,
        VendorUniqueCommand = 6,
        VendorUniqueResponse = 7,
        ExtendedCommand = 14,
        ExtendedResponse = 15,
    }
}

wire_enum! {
    AecpStatus, AECP_SUBTYPE, UnknownStatus {
        Success = 0,
        NotImplemented = 1,
    }
}

impl AcmpMessageType {
    /// Responses carry odd message-type values.
    pub const fn is_response(self) -> bool {
        self.as_u8() & 1 == 1
    }
}

impl AecpMessageType {
    pub const fn is_response(self) -> bool {
        self.as_u8() & 1 == 1
    }
}
