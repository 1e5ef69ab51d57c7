use signalfx_common::AlertMutingRuleFilter;

use super::MutingFilter;

/// Declared filters split back out of the platform's single filter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedFilters {
    pub filter: Vec<MutingFilter>,
    pub detectors: Vec<String>,
}

/// Combines generic filters and detector ids into the list the platform
/// expects. Each detector becomes a non-negated `sf_detectorId` filter.
pub fn encode_filters(filters: &[MutingFilter], detectors: &[String]) -> Vec<AlertMutingRuleFilter> {
    filters
        .iter()
        .map(|f| AlertMutingRuleFilter::new(&f.property, &f.property_value, f.negated))
        .chain(detectors.iter().map(|d| AlertMutingRuleFilter::detector(d.as_str())))
        .collect()
}

/// Inverse of [`encode_filters`]. Order within each bucket follows the remote
/// list; callers treat both as sets.
pub fn partition_filters(remote: &[AlertMutingRuleFilter]) -> PartitionedFilters {
    let mut out = PartitionedFilters::default();
    for f in remote {
        if f.is_detector() {
            out.detectors.push(f.property_value.clone());
        } else {
            out.filter.push(MutingFilter::new(&f.property, &f.property_value, f.not));
        }
    }
    out
}
