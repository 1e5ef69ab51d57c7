use signalfx_common::time::millis_to_secs;
use signalfx_common::AlertMutingRule;

use super::{partition_filters, ResourceData};

/// Copies a remote rule onto tracked state. The declared `start_time` is left
/// alone; the server's start lands in `effective_start_time` unconverted.
pub fn project(data: &mut ResourceData, rule: &AlertMutingRule) {
    tracing::debug!(
        id = %rule.id,
        start_time = rule.start_time,
        stop_time = rule.stop_time,
        filters = rule.filters.len(),
        "projecting alert muting rule onto state"
    );

    let parts = partition_filters(&rule.filters);
    data.config.description = rule.description.clone();
    data.config.filter = parts.filter;
    data.config.detectors = parts.detectors;
    data.config.stop_time = millis_to_secs(rule.stop_time);
    data.effective_start_time = Some(rule.start_time);
}
