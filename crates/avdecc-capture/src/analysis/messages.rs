use std::collections::BTreeMap;

use avdecc_core::AvdeccMessage;

use crate::MessageSummary;

/// Counters keyed by (protocol name, raw message type).
pub(crate) type MessageStats = BTreeMap<(&'static str, u8), MessageCount>;

#[derive(Debug, Clone)]
pub(crate) struct MessageCount {
    pub name: &'static str,
    pub count: u64,
}

pub(crate) fn add_message(stats: &mut MessageStats, message: &AvdeccMessage) {
    let key = (message.subtype().name(), message.message_type());
    stats
        .entry(key)
        .or_insert(MessageCount {
            name: message.message_name(),
            count: 0,
        })
        .count += 1;
}

pub(crate) fn build_message_summaries(stats: MessageStats) -> Vec<MessageSummary> {
    stats
        .into_iter()
        .map(|((protocol, message_type), entry)| MessageSummary {
            protocol: protocol.to_string(),
            message_type,
            name: entry.name.to_string(),
            count: entry.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use avdecc_core::{AcmpMessage, AcmpMessageType, AdpMessage, AdpMessageType};

    #[test]
    fn summaries_are_sorted_by_protocol_then_type() {
        let mut stats = MessageStats::new();
        let connect = AcmpMessage {
            message_type: AcmpMessageType::ConnectRxResponse,
            ..AcmpMessage::default()
        };
        let departing = AdpMessage {
            message_type: AdpMessageType::EntityDeparting,
            ..AdpMessage::default()
        };
        add_message(&mut stats, &AvdeccMessage::Adp(departing));
        add_message(&mut stats, &AvdeccMessage::Acmp(connect.clone()));
        add_message(&mut stats, &AvdeccMessage::Adp(AdpMessage::default()));
        add_message(&mut stats, &AvdeccMessage::Acmp(connect));

        let summaries = build_message_summaries(stats);
        let keys: Vec<_> = summaries
            .iter()
            .map(|s| (s.protocol.as_str(), s.message_type, s.count))
            .collect();
        assert_eq!(keys, vec![("acmp", 7, 2), ("adp", 0, 1), ("adp", 1, 1)]);
        assert_eq!(summaries[0].name, "ConnectRxResponse");
    }
}
