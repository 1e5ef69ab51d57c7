use std::sync::Arc;

use async_trait::async_trait;
use signalfx_client::AlertMutingApi;
use signalfx_common::time::{Clock, SystemClock};
use signalfx_common::CreateUpdateAlertMutingRuleRequest;

use super::{build_payload, project, start_time_for_update, ResourceData};
use crate::resource::{Operation, Resource, ResourceError};

pub const TYPE_NAME: &str = "signalfx_alert_muting_rule";

pub struct AlertMutingRuleResource<A: ?Sized> {
    api: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<A: AlertMutingApi + ?Sized> AlertMutingRuleResource<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_clock(api, Arc::new(SystemClock))
    }

    pub fn with_clock(api: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }

    fn require_id(data: &ResourceData, operation: Operation) -> Result<String, ResourceError> {
        data.id()
            .map(str::to_string)
            .ok_or(ResourceError::MissingId(operation))
    }

    /// Update body with the start time chosen against the current clock.
    pub fn update_payload(
        &self,
        data: &ResourceData,
    ) -> Result<CreateUpdateAlertMutingRuleRequest, ResourceError> {
        let mut payload = build_payload(&data.config)?;
        payload.start_time = start_time_for_update(
            data.config.start_time,
            data.effective_start_time,
            self.clock.now_secs(),
        )?;
        Ok(payload)
    }
}

fn debug_json(payload: &CreateUpdateAlertMutingRuleRequest) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

#[async_trait]
impl<A: AlertMutingApi + ?Sized> Resource for AlertMutingRuleResource<A> {
    type Data = ResourceData;

    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn create(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        let payload = build_payload(&data.config)?;
        tracing::debug!(payload = %debug_json(&payload), "create alert muting rule");

        let rule = self
            .api
            .create_alert_muting_rule(&payload)
            .await
            .map_err(|e| ResourceError::api(Operation::Create, e))?;

        data.set_id(rule.id.clone());
        project(data, &rule);
        Ok(())
    }

    async fn read(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        let id = Self::require_id(data, Operation::Read)?;

        match self.api.get_alert_muting_rule(&id).await {
            Ok(rule) => {
                project(data, &rule);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(%id, "alert muting rule no longer exists, removing from state");
                data.clear_id();
                Ok(())
            }
            Err(e) => Err(ResourceError::api(Operation::Read, e)),
        }
    }

    async fn update(&self, data: &mut ResourceData) -> Result<(), ResourceError> {
        let id = Self::require_id(data, Operation::Update)?;
        let payload = self.update_payload(data)?;
        tracing::debug!(%id, payload = %debug_json(&payload), "update alert muting rule");

        let rule = self
            .api
            .update_alert_muting_rule(&id, &payload)
            .await
            .map_err(|e| ResourceError::api(Operation::Update, e))?;

        data.set_id(rule.id.clone());
        project(data, &rule);
        Ok(())
    }

    async fn delete(&self, data: &ResourceData) -> Result<(), ResourceError> {
        let id = Self::require_id(data, Operation::Delete)?;
        tracing::debug!(%id, "delete alert muting rule");
        self.api
            .delete_alert_muting_rule(&id)
            .await
            .map_err(|e| ResourceError::api(Operation::Delete, e))
    }

    async fn exists(&self, data: &ResourceData) -> Result<bool, ResourceError> {
        let id = Self::require_id(data, Operation::Exists)?;
        match self.api.get_alert_muting_rule(&id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ResourceError::api(Operation::Exists, e)),
        }
    }

    fn import(&self, id: &str) -> ResourceData {
        let mut data = ResourceData::default();
        data.set_id(id);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_muting::{AlertMutingRuleConfig, MutingFilter};
    use signalfx_client::ClientError;
    use signalfx_common::time::FixedClock;
    use signalfx_common::{AlertMutingRule, AlertMutingRuleFilter};
    use std::collections::HashMap;
    use std::sync::Mutex;

    const NOW: i64 = 1_700_000_000;

    /// Records payloads and behaves like the platform: past starts are moved
    /// to `now`.
    #[derive(Default)]
    struct FakeApi {
        now_ms: i64,
        rules: Mutex<HashMap<String, AlertMutingRule>>,
        sent: Mutex<Vec<CreateUpdateAlertMutingRuleRequest>>,
        fail_with: Mutex<Option<u16>>,
    }

    impl FakeApi {
        fn at(now: i64) -> Self {
            Self {
                now_ms: now * 1000,
                ..Default::default()
            }
        }

        fn last_sent(&self) -> CreateUpdateAlertMutingRuleRequest {
            self.sent.lock().unwrap().last().cloned().unwrap()
        }

        fn fail_next(&self, status: u16) {
            *self.fail_with.lock().unwrap() = Some(status);
        }

        fn check_failure(&self) -> Result<(), ClientError> {
            match self.fail_with.lock().unwrap().take() {
                Some(404) => Err(ClientError::NotFound("/v2/alertmuting".into())),
                Some(status) => Err(ClientError::Status {
                    status,
                    body: String::new(),
                }),
                None => Ok(()),
            }
        }

        fn store(&self, id: &str, payload: &CreateUpdateAlertMutingRuleRequest) -> AlertMutingRule {
            let rule = AlertMutingRule {
                id: id.to_string(),
                description: payload.description.clone(),
                filters: payload.filters.clone(),
                start_time: payload.start_time.max(self.now_ms),
                stop_time: payload.stop_time,
                created: None,
                creator: None,
                last_updated: None,
                last_updated_by: None,
            };
            self.rules.lock().unwrap().insert(id.to_string(), rule.clone());
            rule
        }
    }

    #[async_trait]
    impl AlertMutingApi for FakeApi {
        async fn create_alert_muting_rule(
            &self,
            payload: &CreateUpdateAlertMutingRuleRequest,
        ) -> Result<AlertMutingRule, ClientError> {
            self.check_failure()?;
            self.sent.lock().unwrap().push(payload.clone());
            Ok(self.store("rule-1", payload))
        }

        async fn get_alert_muting_rule(&self, id: &str) -> Result<AlertMutingRule, ClientError> {
            self.check_failure()?;
            self.rules
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(id.to_string()))
        }

        async fn update_alert_muting_rule(
            &self,
            id: &str,
            payload: &CreateUpdateAlertMutingRuleRequest,
        ) -> Result<AlertMutingRule, ClientError> {
            self.check_failure()?;
            self.sent.lock().unwrap().push(payload.clone());
            if !self.rules.lock().unwrap().contains_key(id) {
                return Err(ClientError::NotFound(id.to_string()));
            }
            Ok(self.store(id, payload))
        }

        async fn delete_alert_muting_rule(&self, id: &str) -> Result<(), ClientError> {
            self.check_failure()?;
            self.rules
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| ClientError::NotFound(id.to_string()))
        }
    }

    fn resource(api: &Arc<FakeApi>, now: i64) -> AlertMutingRuleResource<FakeApi> {
        AlertMutingRuleResource::with_clock(api.clone(), Arc::new(FixedClock(now)))
    }

    fn declared(start: i64) -> ResourceData {
        ResourceData::new(AlertMutingRuleConfig {
            description: "muted during deploy".into(),
            detectors: vec!["det-1".into()],
            filter: vec![MutingFilter::new("env", "prod", false)],
            start_time: start,
            stop_time: 0,
        })
    }

    #[tokio::test]
    async fn create_with_past_start_tracks_effective_time() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW - 100);

        res.create(&mut data).await.unwrap();

        assert_eq!(api.last_sent().start_time, (NOW - 100) * 1000);
        assert_eq!(data.id(), Some("rule-1"));
        assert_eq!(data.config.start_time, NOW - 100);
        assert!(data.effective_start_time.unwrap() >= NOW * 1000);
    }

    #[tokio::test]
    async fn create_sends_combined_filters() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW + 60);

        res.create(&mut data).await.unwrap();

        assert_eq!(
            api.last_sent().filters,
            vec![
                AlertMutingRuleFilter::new("env", "prod", false),
                AlertMutingRuleFilter::new("sf_detectorId", "det-1", false),
            ]
        );
        assert_eq!(data.config.filter, vec![MutingFilter::new("env", "prod", false)]);
        assert_eq!(data.config.detectors, vec!["det-1".to_string()]);
    }

    #[tokio::test]
    async fn update_after_start_passed_resends_effective() {
        let api = Arc::new(FakeApi::at(NOW));
        let mut data = declared(NOW - 100);
        resource(&api, NOW).create(&mut data).await.unwrap();
        let effective = data.effective_start_time.unwrap();

        data.config.description = "extended".into();
        resource(&api, NOW + 30).update(&mut data).await.unwrap();

        assert_eq!(api.last_sent().start_time, effective);
        assert_eq!(data.config.description, "extended");
        assert_eq!(data.config.start_time, NOW - 100);
    }

    #[tokio::test]
    async fn update_before_start_resends_declared() {
        let api = Arc::new(FakeApi::at(NOW));
        let mut data = declared(NOW + 600);
        resource(&api, NOW).create(&mut data).await.unwrap();

        data.config.stop_time = NOW + 1200;
        resource(&api, NOW + 10).update(&mut data).await.unwrap();

        let sent = api.last_sent();
        assert_eq!(sent.start_time, (NOW + 600) * 1000);
        assert_eq!(sent.stop_time, (NOW + 1200) * 1000);
        assert_eq!(data.config.stop_time, NOW + 1200);
    }

    #[tokio::test]
    async fn failed_update_leaves_state_untouched() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW + 600);
        res.create(&mut data).await.unwrap();
        let before = data.clone();

        api.fail_next(500);
        let err = res.update(&mut data).await.unwrap_err();

        assert!(err.to_string().contains("update alert muting rule"));
        assert_eq!(data, before);
    }

    #[tokio::test]
    async fn read_of_vanished_rule_clears_id() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW);
        data.set_id("gone");

        res.read(&mut data).await.unwrap();

        assert!(data.id().is_none());
    }

    #[tokio::test]
    async fn read_surfaces_other_errors() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW);
        data.set_id("rule-1");

        api.fail_next(503);
        let err = res.read(&mut data).await.unwrap_err();

        assert!(matches!(
            err,
            ResourceError::Api {
                operation: Operation::Read,
                ..
            }
        ));
        assert_eq!(data.id(), Some("rule-1"));
    }

    #[tokio::test]
    async fn read_refreshes_from_remote() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW + 60);
        res.create(&mut data).await.unwrap();

        data.config.description = "drifted locally".into();
        res.read(&mut data).await.unwrap();

        assert_eq!(data.config.description, "muted during deploy");
    }

    #[tokio::test]
    async fn not_found_is_an_error_outside_read() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW + 60);
        data.set_id("gone");

        let err = res.update(&mut data).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(data.id(), Some("gone"));

        let err = res.delete(&data).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn exists_maps_not_found_to_false() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW + 60);
        res.create(&mut data).await.unwrap();

        assert!(res.exists(&data).await.unwrap());
        res.delete(&data).await.unwrap();
        assert!(!res.exists(&data).await.unwrap());

        api.fail_next(500);
        assert!(res.exists(&data).await.is_err());
    }

    #[tokio::test]
    async fn operations_without_id_fail() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(NOW);

        assert!(matches!(
            res.read(&mut data).await,
            Err(ResourceError::MissingId(Operation::Read))
        ));
        assert!(matches!(
            res.delete(&data).await,
            Err(ResourceError::MissingId(Operation::Delete))
        ));
    }

    #[tokio::test]
    async fn import_then_read() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut created = declared(NOW + 60);
        res.create(&mut created).await.unwrap();

        let mut imported = res.import("rule-1");
        assert_eq!(imported.id(), Some("rule-1"));
        assert!(imported.effective_start_time.is_none());

        res.read(&mut imported).await.unwrap();
        assert_eq!(imported.config.description, "muted during deploy");
        assert_eq!(imported.config.detectors, vec!["det-1".to_string()]);
        assert_eq!(imported.effective_start_time, Some((NOW + 60) * 1000));
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_api() {
        let api = Arc::new(FakeApi::at(NOW));
        let res = resource(&api, NOW);
        let mut data = declared(-1);

        let err = res.create(&mut data).await.unwrap_err();

        assert!(matches!(err, ResourceError::Payload(_)));
        assert!(api.sent.lock().unwrap().is_empty());
    }
}
