use thiserror::Error;

/// Errors returned by the AVDECC encoders and decoders.
///
/// Every error is scoped to the single message being processed.
///
/// # Examples
/// ```
/// use avdecc_core::CodecError;
///
/// let err = CodecError::TruncatedPacket { needed: 68, actual: 67 };
/// assert!(err.to_string().contains("packet too short"));
/// assert_eq!(err.id(), "AVDECC-TRUNCATED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("packet too short: need {needed} bytes, got {actual}")]
    TruncatedPacket { needed: usize, actual: usize },
    #[error("value {value:#x} does not fit in {bits}-bit field {field}")]
    ValueOutOfRange {
        field: &'static str,
        value: u64,
        bits: u8,
    },
    #[error("unknown subtype: {value:#04x}")]
    UnknownSubtype { value: u8 },
    #[error("subtype mismatch: expected {expected:#04x}, got {found:#04x}")]
    SubtypeMismatch { expected: u8, found: u8 },
    #[error("unknown message type {value} for subtype {subtype:#04x}")]
    UnknownMessageType { subtype: u8, value: u8 },
    #[error("unknown status {value} for subtype {subtype:#04x}")]
    UnknownStatus { subtype: u8, value: u8 },
    #[error("unsupported AECP message type: {message_type}")]
    UnsupportedVariant { message_type: u8 },
    #[error("invalid data length: {length}")]
    InvalidDataLength { length: u16 },
    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

impl CodecError {
    /// Stable identifier used to group errors in reports.
    pub fn id(&self) -> &'static str {
        match self {
            CodecError::TruncatedPacket { .. } => "AVDECC-TRUNCATED",
            CodecError::ValueOutOfRange { .. } => "AVDECC-VALUE-RANGE",
            CodecError::UnknownSubtype { .. } => "AVDECC-UNKNOWN-SUBTYPE",
            CodecError::SubtypeMismatch { .. } => "AVDECC-SUBTYPE-MISMATCH",
            CodecError::UnknownMessageType { .. } => "AVDECC-UNKNOWN-MESSAGE-TYPE",
            CodecError::UnknownStatus { .. } => "AVDECC-UNKNOWN-STATUS",
            CodecError::UnsupportedVariant { .. } => "AVDECC-UNSUPPORTED-VARIANT",
            CodecError::InvalidDataLength { .. } => "AVDECC-DATA-LENGTH",
            CodecError::PayloadTooLarge { .. } => "AVDECC-PAYLOAD-TOO-LARGE",
        }
    }
}
