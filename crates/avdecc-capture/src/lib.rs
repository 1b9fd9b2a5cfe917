//! Capture inspection on top of the AVDECC codec.
//!
//! Reads PCAP/PCAPNG captures, extracts AVDECC frames from Ethernet traffic
//! and aggregates the decoded messages into a deterministic report. All file
//! I/O lives here; `avdecc-core` stays a pure codec over byte slices.
//!
//! Invariants:
//! - Report outputs are deterministic and stable across runs.
//! - A frame that fails to decode is counted as a violation, never fatal.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use avdecc_capture::analyze_pcap_file;
//!
//! let report = analyze_pcap_file(Path::new("capture.pcapng"))?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod source;

pub use analysis::frame::error::FrameError;
pub use analysis::frame::{AvdeccFrame, parse_avdecc_frame};
pub use analysis::{AnalysisError, analyze_pcap_file, analyze_source};
pub use source::pcap::error::PcapSourceError;
pub use source::{PacketEvent, PacketSource, PcapFileSource, PcapngWriter, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no capture time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Aggregated analysis report with deterministic ordering.
///
/// # Examples
/// ```
/// use avdecc_capture::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.report_version, avdecc_capture::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    pub input: InputInfo,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_summary: Option<CaptureSummary>,
    /// Message counters sorted by protocol, then message type.
    pub messages: Vec<MessageSummary>,
    /// Entities seen in ADP traffic, sorted by entity id.
    pub entities: Vec<EntitySummary>,
    /// Decode failures sorted by id.
    pub violations: Vec<Violation>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input capture metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Basic capture summary (timestamps may be absent).
///
/// # Examples
/// ```
/// use avdecc_capture::CaptureSummary;
///
/// let summary = CaptureSummary {
///     packets_total: 10,
///     avdecc_frames: 4,
///     decoded_messages: 3,
///     time_start: None,
///     time_end: None,
/// };
/// assert_eq!(summary.avdecc_frames - summary.decoded_messages, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSummary {
    /// Total packet count observed in the capture.
    pub packets_total: u64,
    /// Frames carrying the AVTP EtherType.
    pub avdecc_frames: u64,
    /// AVDECC frames that decoded without error.
    pub decoded_messages: u64,
    /// RFC3339 timestamp of the first packet (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    /// RFC3339 timestamp of the last packet (if known).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
}

/// Number of decoded messages of one protocol/message-type pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Protocol name (`adp`, `aecp` or `acmp`).
    pub protocol: String,
    /// Raw 4-bit message type.
    pub message_type: u8,
    pub name: String,
    pub count: u64,
}

/// Last known state of an entity seen in ADP traffic.
///
/// Identifiers are rendered as fixed-width hex strings; capability masks
/// keep their raw bits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entity_id: String,
    pub vendor_id: String,
    pub model_id: String,
    pub entity_capabilities: u32,
    pub talker_stream_sources: u16,
    pub listener_stream_sinks: u16,
    pub controller_capabilities: u32,
    /// Available index of the latest advertisement.
    pub available_index: u32,
    pub valid_time: u8,
    /// True when the latest ADP message was ENTITY_DEPARTING.
    pub departed: bool,
    /// Available plus departing messages seen for this entity.
    pub adp_count: u64,
    /// Source MAC of the latest ADP message.
    pub source_mac: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

/// Decode failures sharing one error id.
///
/// # Examples
/// ```
/// use avdecc_capture::Violation;
///
/// let violation = Violation {
///     id: "AVDECC-TRUNCATED".to_string(),
///     severity: "error".to_string(),
///     message: "packet too short: need 68 bytes, got 40".to_string(),
///     count: 1,
///     examples: vec!["packet 3 from 00:1b:92:00:00:01 @ 1970-01-01T00:00:00Z".to_string()],
/// };
/// assert_eq!(violation.count, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Stable identifier, see `CodecError::id`.
    pub id: String,
    pub severity: String,
    /// Message of the first occurrence.
    pub message: String,
    /// Number of occurrences aggregated into this violation.
    pub count: u64,
    /// At most three example contexts, formatted as `packet n from mac @ ts`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use avdecc_capture::make_stub_report;
///
/// let report = make_stub_report("capture.pcapng", 123);
/// assert_eq!(report.report_version, avdecc_capture::REPORT_VERSION);
/// assert!(report.entities.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "avdecc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        capture_summary: None,
        messages: vec![],
        entities: vec![],
        violations: vec![],
    }
}
