use std::collections::BTreeMap;

use avdecc_core::CodecError;

use crate::Violation;

const MAX_EXAMPLES: usize = 3;

/// Decode failures grouped by stable error id.
pub(crate) type ViolationStats = BTreeMap<&'static str, ViolationEntry>;

#[derive(Debug, Clone)]
pub(crate) struct ViolationEntry {
    /// Message of the first occurrence.
    pub message: String,
    pub count: u64,
    pub examples: Vec<String>,
}

pub(crate) fn add_violation(stats: &mut ViolationStats, err: &CodecError, context: String) {
    let entry = stats.entry(err.id()).or_insert_with(|| ViolationEntry {
        message: err.to_string(),
        count: 0,
        examples: Vec::new(),
    });
    entry.count += 1;
    if entry.examples.len() < MAX_EXAMPLES {
        entry.examples.push(context);
    }
}

pub(crate) fn build_violations(stats: ViolationStats) -> Vec<Violation> {
    stats
        .into_iter()
        .map(|(id, entry)| Violation {
            id: id.to_string(),
            severity: "error".to_string(),
            message: entry.message,
            count: entry.count,
            examples: entry.examples,
        })
        .collect()
}
