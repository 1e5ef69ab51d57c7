use dashmap::DashMap;
use std::sync::Arc;

use signalfx_common::AlertMutingRule;

#[derive(Clone)]
pub struct MutingRuleStore {
    rules: Arc<DashMap<String, AlertMutingRule>>,
}

impl Default for MutingRuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MutingRuleStore {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(DashMap::new()),
        }
    }

    pub fn insert(&self, rule: AlertMutingRule) {
        self.rules.insert(rule.id.clone(), rule);
    }

    pub fn get(&self, id: &str) -> Option<AlertMutingRule> {
        self.rules.get(id).map(|r| r.clone())
    }

    pub fn list(&self) -> Vec<AlertMutingRule> {
        self.rules.iter().map(|r| r.value().clone()).collect()
    }

    pub fn update(&self, rule: AlertMutingRule) -> bool {
        match self.rules.get_mut(&rule.id) {
            Some(mut existing) => {
                *existing = rule;
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, id: &str) -> bool {
        self.rules.remove(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalfx_common::AlertMutingRuleFilter;

    fn sample_rule() -> AlertMutingRule {
        AlertMutingRule {
            id: "rule-1".into(),
            description: "deploy window".into(),
            filters: vec![AlertMutingRuleFilter::new("env", "prod", false)],
            start_time: 1_700_000_000_000,
            stop_time: 0,
            created: None,
            creator: None,
            last_updated: None,
            last_updated_by: None,
        }
    }

    #[test]
    fn insert_and_get() {
        let store = MutingRuleStore::new();
        store.insert(sample_rule());
        assert_eq!(store.get("rule-1").unwrap().description, "deploy window");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn update_existing() {
        let store = MutingRuleStore::new();
        store.insert(sample_rule());
        let mut updated = sample_rule();
        updated.stop_time = 1_700_000_360_000;
        assert!(store.update(updated));
        assert_eq!(store.get("rule-1").unwrap().stop_time, 1_700_000_360_000);
    }

    #[test]
    fn update_missing_returns_false() {
        let store = MutingRuleStore::new();
        assert!(!store.update(sample_rule()));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn delete_existing_and_missing() {
        let store = MutingRuleStore::new();
        store.insert(sample_rule());
        assert!(store.delete("rule-1"));
        assert!(!store.delete("rule-1"));
        assert!(store.list().is_empty());
    }
}
