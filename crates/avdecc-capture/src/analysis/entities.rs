use std::collections::BTreeMap;

use avdecc_core::{AdpMessage, AdpMessageType};

use crate::EntitySummary;

use super::frame::parser::format_mac;
use super::ts_to_rfc3339;

/// Last known state of an entity, keyed by entity id.
pub(crate) type EntityStats = BTreeMap<u64, EntityState>;

#[derive(Debug, Clone)]
pub(crate) struct EntityState {
    pub advertisement: AdpMessage,
    pub departed: bool,
    pub adp_count: u64,
    pub source_mac: [u8; 6],
    pub last_seen: Option<f64>,
}

/// Record an ADP advertisement or departure. Discovery requests name no
/// entity and are ignored.
pub(crate) fn add_adp_message(
    stats: &mut EntityStats,
    message: &AdpMessage,
    source_mac: [u8; 6],
    ts: Option<f64>,
) {
    let departed = match message.message_type {
        AdpMessageType::EntityAvailable => false,
        AdpMessageType::EntityDeparting => true,
        AdpMessageType::EntityDiscover => return,
    };

    let entry = stats
        .entry(message.entity_id)
        .or_insert_with(|| EntityState {
            advertisement: message.clone(),
            departed,
            adp_count: 0,
            source_mac,
            last_seen: None,
        });
    entry.adp_count += 1;
    entry.departed = departed;
    entry.source_mac = source_mac;
    if !departed {
        entry.advertisement = message.clone();
    }
    if ts.is_some() {
        entry.last_seen = ts;
    }
}

pub(crate) fn build_entity_summaries(stats: EntityStats) -> Vec<EntitySummary> {
    stats
        .into_iter()
        .map(|(entity_id, state)| {
            let adv = &state.advertisement;
            EntitySummary {
                entity_id: format_id(entity_id),
                vendor_id: format!("{:#010x}", adv.vendor_id),
                model_id: format!("{:#010x}", adv.model_id),
                entity_capabilities: adv.entity_capabilities.bits(),
                talker_stream_sources: adv.talker_stream_sources,
                listener_stream_sinks: adv.listener_stream_sinks,
                controller_capabilities: adv.controller_capabilities.bits(),
                available_index: adv.available_index,
                valid_time: adv.valid_time,
                departed: state.departed,
                adp_count: state.adp_count,
                source_mac: format_mac(&state.source_mac),
                last_seen: ts_to_rfc3339(state.last_seen),
            }
        })
        .collect()
}

fn format_id(id: u64) -> String {
    format!("{id:#018x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available(entity_id: u64, available_index: u32) -> AdpMessage {
        AdpMessage {
            entity_id,
            available_index,
            valid_time: 31,
            ..AdpMessage::default()
        }
    }

    #[test]
    fn entities_are_sorted_and_track_latest_state() {
        let mut stats = EntityStats::new();
        let mac = [0, 1, 2, 3, 4, 5];
        add_adp_message(&mut stats, &available(0x20, 1), mac, Some(1.0));
        add_adp_message(&mut stats, &available(0x10, 7), mac, Some(2.0));
        add_adp_message(&mut stats, &available(0x20, 2), mac, Some(3.0));

        let summaries = build_entity_summaries(stats);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].entity_id, "0x0000000000000010");
        assert_eq!(summaries[1].available_index, 2);
        assert_eq!(summaries[1].adp_count, 2);
        assert_eq!(summaries[1].source_mac, "00:01:02:03:04:05");
        assert_eq!(
            summaries[1].last_seen.as_deref(),
            Some("1970-01-01T00:00:03Z")
        );
    }

    #[test]
    fn departing_marks_entity_and_keeps_advertisement() {
        let mut stats = EntityStats::new();
        add_adp_message(&mut stats, &available(0x30, 9), [0; 6], None);
        let departing = AdpMessage {
            message_type: AdpMessageType::EntityDeparting,
            entity_id: 0x30,
            ..AdpMessage::default()
        };
        add_adp_message(&mut stats, &departing, [0; 6], None);

        let summaries = build_entity_summaries(stats);
        assert!(summaries[0].departed);
        assert_eq!(summaries[0].available_index, 9);
        assert!(summaries[0].last_seen.is_none());
    }

    #[test]
    fn discover_requests_are_ignored() {
        let mut stats = EntityStats::new();
        let discover = AdpMessage {
            message_type: AdpMessageType::EntityDiscover,
            ..AdpMessage::default()
        };
        add_adp_message(&mut stats, &discover, [0; 6], Some(1.0));
        assert!(stats.is_empty());
    }
}
