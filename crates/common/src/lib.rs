pub mod alert_muting;
pub mod time;

pub use alert_muting::{
    AlertMutingRule, AlertMutingRuleFilter, CreateUpdateAlertMutingRuleRequest, DETECTOR_PROPERTY,
};
