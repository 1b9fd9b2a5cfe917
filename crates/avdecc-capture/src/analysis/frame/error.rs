use thiserror::Error;

/// Errors returned while extracting an AVDECC PDU from a link-layer frame.
///
/// # Examples
/// ```
/// use avdecc_capture::FrameError;
///
/// let err = FrameError::Slice("too short".to_string());
/// assert!(err.to_string().contains("frame slice error"));
/// ```
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame slice error: {0}")]
    Slice(String),
    #[error("VLAN slice error: {0}")]
    Vlan(String),
}
