use async_trait::async_trait;
use signalfx_common::{AlertMutingRule, CreateUpdateAlertMutingRuleRequest};

use crate::ClientError;

/// The alert-muting endpoints of the platform. Each call is a single round
/// trip; implementations do not retry.
#[async_trait]
pub trait AlertMutingApi: Send + Sync {
    async fn create_alert_muting_rule(
        &self,
        payload: &CreateUpdateAlertMutingRuleRequest,
    ) -> Result<AlertMutingRule, ClientError>;

    async fn get_alert_muting_rule(&self, id: &str) -> Result<AlertMutingRule, ClientError>;

    async fn update_alert_muting_rule(
        &self,
        id: &str,
        payload: &CreateUpdateAlertMutingRuleRequest,
    ) -> Result<AlertMutingRule, ClientError>;

    async fn delete_alert_muting_rule(&self, id: &str) -> Result<(), ClientError>;
}
