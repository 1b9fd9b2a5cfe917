use std::path::Path;

use avdecc_core::{AvdeccMessage, decode_message};
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{debug, trace};

use crate::source::{PacketEvent, PacketSource, PcapFileSource, SourceError};
use crate::{CaptureSummary, DEFAULT_GENERATED_AT, Report, make_stub_report};

mod entities;
pub mod frame;
mod messages;
mod violations;

use entities::{EntityStats, add_adp_message, build_entity_summaries};
use frame::parse_avdecc_frame;
use frame::parser::format_mac;
use messages::{MessageStats, add_message, build_message_summaries};
use violations::{ViolationStats, add_violation, build_violations};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_pcap_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = PcapFileSource::open(path)?;
    analyze_source(path, source)
}

/// Decode every AVDECC frame of `source` into a report.
///
/// `path` is only used for the report's input metadata and must exist.
pub fn analyze_source<S: PacketSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut packets_total = 0u64;
    let mut avdecc_frames = 0u64;
    let mut decoded_messages = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;
    let mut message_stats = MessageStats::new();
    let mut entity_stats = EntityStats::new();
    let mut violation_stats = ViolationStats::new();

    while let Some(PacketEvent { ts, linktype, data }) = source.next_packet()? {
        packets_total += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);

        let frame = match parse_avdecc_frame(linktype, &data) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(err) => {
                debug!(packet = packets_total, error = %err, "skipping unparsable frame");
                continue;
            }
        };
        avdecc_frames += 1;
        trace!(packet = packets_total, len = frame.pdu.len(), "AVDECC frame");

        match decode_message(frame.pdu) {
            Ok(message) => {
                decoded_messages += 1;
                add_message(&mut message_stats, &message);
                if let AvdeccMessage::Adp(adp) = &message {
                    add_adp_message(&mut entity_stats, adp, frame.src_mac, ts);
                }
            }
            Err(err) => {
                debug!(packet = packets_total, id = err.id(), error = %err, "decode failed");
                let context = format!(
                    "packet {} from {} @ {}",
                    packets_total,
                    format_mac(&frame.src_mac),
                    ts_to_rfc3339(ts).unwrap_or_else(|| "unknown".to_string())
                );
                add_violation(&mut violation_stats, &err, context);
            }
        }
    }

    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());
    report.capture_summary = Some(CaptureSummary {
        packets_total,
        avdecc_frames,
        decoded_messages,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    });
    report.generated_at = report
        .capture_summary
        .as_ref()
        .and_then(|summary| summary.time_end.clone().or(summary.time_start.clone()))
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());

    report.messages = build_message_summaries(message_stats);
    report.entities = build_entity_summaries(entity_stats);
    report.violations = build_violations(violation_stats);
    Ok(report)
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let Some(ts) = ts else {
        return;
    };
    if first.is_none_or(|existing| ts < existing) {
        *first = Some(ts);
    }
    if last.is_none_or(|existing| ts > existing) {
        *last = Some(ts);
    }
}

pub(crate) fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let ts = ts?;
    let nanos = (ts * 1_000_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ts_bounds_ignore_missing_timestamps() {
        let mut first = None;
        let mut last = None;
        update_ts_bounds(&mut first, &mut last, Some(5.0));
        update_ts_bounds(&mut first, &mut last, None);
        update_ts_bounds(&mut first, &mut last, Some(2.0));
        update_ts_bounds(&mut first, &mut last, Some(9.5));
        assert_eq!(first, Some(2.0));
        assert_eq!(last, Some(9.5));
    }

    #[test]
    fn rfc3339_formatting() {
        assert_eq!(ts_to_rfc3339(Some(0.0)).as_deref(), Some("1970-01-01T00:00:00Z"));
        assert_eq!(ts_to_rfc3339(Some(1.5)).as_deref(), Some("1970-01-01T00:00:01.5Z"));
        assert!(ts_to_rfc3339(None).is_none());
    }
}
