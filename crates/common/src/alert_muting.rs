use serde::{Deserialize, Deserializer, Serialize};

/// Filter property the platform uses to scope a muting rule to one detector.
pub const DETECTOR_PROPERTY: &str = "sf_detectorId";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMutingRuleFilter {
    pub property: String,
    pub property_value: String,
    #[serde(rename = "NOT", default)]
    pub not: bool,
}

impl AlertMutingRuleFilter {
    pub fn new(property: impl Into<String>, value: impl Into<String>, not: bool) -> Self {
        Self {
            property: property.into(),
            property_value: value.into(),
            not,
        }
    }

    pub fn detector(detector_id: impl Into<String>) -> Self {
        Self::new(DETECTOR_PROPERTY, detector_id, false)
    }

    pub fn is_detector(&self) -> bool {
        self.property == DETECTOR_PROPERTY
    }
}

/// Body of `POST /v2/alertmuting` and `PUT /v2/alertmuting/{id}`.
/// Times are Unix milliseconds; a `stop_time` of 0 means "no stop".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateAlertMutingRuleRequest {
    pub description: String,
    pub filters: Vec<AlertMutingRuleFilter>,
    pub start_time: i64,
    pub stop_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMutingRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filters: Vec<AlertMutingRuleFilter>,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub stop_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<AlertMutingRuleFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<AlertMutingRuleFilter>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_platform_field_names() {
        let req = CreateUpdateAlertMutingRuleRequest {
            description: "maintenance".into(),
            filters: vec![AlertMutingRuleFilter::new("env", "prod", true)],
            start_time: 1_700_000_000_000,
            stop_time: 0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["startTime"], 1_700_000_000_000i64);
        assert_eq!(json["stopTime"], 0);
        assert_eq!(json["filters"][0]["propertyValue"], "prod");
        assert_eq!(json["filters"][0]["NOT"], true);
    }

    #[test]
    fn rule_tolerates_null_filters_and_extra_fields() {
        let json = r#"{
            "id": "EXo7tC4AgAA",
            "description": "nightly",
            "filters": null,
            "startTime": 1700000000000,
            "stopTime": 1700003600000,
            "created": 1699999999000,
            "sendAlertsOnceMutingPeriodHasEnded": false
        }"#;
        let rule: AlertMutingRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.id, "EXo7tC4AgAA");
        assert!(rule.filters.is_empty());
        assert_eq!(rule.stop_time, 1_700_003_600_000);
        assert_eq!(rule.created, Some(1_699_999_999_000));
    }

    #[test]
    fn missing_not_defaults_to_false() {
        let f: AlertMutingRuleFilter =
            serde_json::from_str(r#"{"property":"host","propertyValue":"web-1"}"#).unwrap();
        assert!(!f.not);
    }

    #[test]
    fn detector_filter_uses_reserved_property() {
        let f = AlertMutingRuleFilter::detector("det-1");
        assert_eq!(f.property, "sf_detectorId");
        assert!(f.is_detector());
        assert!(!f.not);
    }
}
