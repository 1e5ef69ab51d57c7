use std::fmt;

use signalfx_common::time::secs_to_millis;
use signalfx_common::CreateUpdateAlertMutingRuleRequest;

use super::{encode_filters, AlertMutingRuleConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    MissingField(&'static str),
    TimeOutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::TimeOutOfRange { field, value } => {
                write!(f, "{field} {value} is not a valid Unix timestamp in seconds")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

pub(crate) fn to_millis(field: &'static str, secs: i64) -> Result<i64, PayloadError> {
    if secs < 0 {
        return Err(PayloadError::TimeOutOfRange { field, value: secs });
    }
    secs_to_millis(secs).ok_or(PayloadError::TimeOutOfRange { field, value: secs })
}

/// Builds the create/update body from declared attributes. The start time is
/// the declared one; updates substitute it via
/// [`start_time_for_update`](super::start_time_for_update).
pub fn build_payload(
    config: &AlertMutingRuleConfig,
) -> Result<CreateUpdateAlertMutingRuleRequest, PayloadError> {
    if config.description.is_empty() {
        return Err(PayloadError::MissingField("description"));
    }

    Ok(CreateUpdateAlertMutingRuleRequest {
        description: config.description.clone(),
        filters: encode_filters(&config.filter, &config.detectors),
        start_time: to_millis("start_time", config.start_time)?,
        stop_time: to_millis("stop_time", config.stop_time)?,
    })
}
