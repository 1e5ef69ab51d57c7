//! Attribute metadata the host uses to plan changes.

use super::{AlertMutingRuleConfig, ResourceData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Int,
    StringList,
    FilterSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, Copy)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub presence: Presence,
    pub force_new: bool,
    pub description: &'static str,
}

pub const ATTRIBUTES: &[Attribute] = &[
    Attribute {
        name: "description",
        kind: AttributeKind::String,
        presence: Presence::Required,
        force_new: false,
        description: "Description of the rule.",
    },
    Attribute {
        name: "detectors",
        kind: AttributeKind::StringList,
        presence: Presence::Optional,
        force_new: false,
        description: "Detectors to which this muting rule applies.",
    },
    Attribute {
        name: "filter",
        kind: AttributeKind::FilterSet,
        presence: Presence::Required,
        force_new: false,
        description: "List of alert muting filters for this rule.",
    },
    Attribute {
        name: "start_time",
        kind: AttributeKind::Int,
        presence: Presence::Required,
        force_new: true,
        description: "Starting time of an alert muting rule as a Unix timestamp, in seconds.",
    },
    Attribute {
        name: "stop_time",
        kind: AttributeKind::Int,
        presence: Presence::Optional,
        force_new: false,
        description: "Stop time of an alert muting rule as a Unix timestamp, in seconds. 0 means no stop.",
    },
    Attribute {
        name: "effective_start_time",
        kind: AttributeKind::Int,
        presence: Presence::Computed,
        force_new: false,
        description: "Start time honored by the platform, in milliseconds.",
    },
];

pub fn attribute(name: &str) -> Option<&'static Attribute> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

/// Names of declared attributes whose values differ between `prior` and
/// `next`. Filters and detectors compare as sets.
pub fn changed_attributes(
    prior: &AlertMutingRuleConfig,
    next: &AlertMutingRuleConfig,
) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if prior.description != next.description {
        changed.push("description");
    }
    if !same_set(&prior.detectors, &next.detectors) {
        changed.push("detectors");
    }
    if !same_set(&prior.filter, &next.filter) {
        changed.push("filter");
    }
    if prior.start_time != next.start_time {
        changed.push("start_time");
    }
    if prior.stop_time != next.stop_time {
        changed.push("stop_time");
    }
    changed
}

/// True when a force-new attribute changed, so the rule must be destroyed and
/// created again instead of updated in place.
pub fn requires_replacement(prior: &ResourceData, next: &AlertMutingRuleConfig) -> bool {
    changed_attributes(&prior.config, next)
        .into_iter()
        .any(|name| attribute(name).is_some_and(|a| a.force_new))
}

fn same_set<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    a.dedup();
    b.sort();
    b.dedup();
    a == b
}
