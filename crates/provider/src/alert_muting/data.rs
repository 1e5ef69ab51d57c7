use serde::{Deserialize, Serialize};

/// A generic muting condition as declared by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MutingFilter {
    pub property: String,
    pub property_value: String,
    #[serde(default)]
    pub negated: bool,
}

impl MutingFilter {
    pub fn new(property: impl Into<String>, value: impl Into<String>, negated: bool) -> Self {
        Self {
            property: property.into(),
            property_value: value.into(),
            negated,
        }
    }
}

/// Declared attributes. Times are Unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMutingRuleConfig {
    pub description: String,
    #[serde(default)]
    pub detectors: Vec<String>,
    pub filter: Vec<MutingFilter>,
    pub start_time: i64,
    #[serde(default)]
    pub stop_time: i64,
}

/// Tracked state of one rule: remote id, declared attributes and the start
/// time the server actually honors (milliseconds, observed only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub config: AlertMutingRuleConfig,
    #[serde(default)]
    pub effective_start_time: Option<i64>,
}

impl ResourceData {
    pub fn new(config: AlertMutingRuleConfig) -> Self {
        Self {
            id: None,
            config,
            effective_start_time: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Drops the record from tracked state.
    pub fn clear_id(&mut self) {
        self.id = None;
    }
}
