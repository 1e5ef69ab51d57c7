use std::sync::Arc;

use signalfx_client::SignalFxClient;
use signalfx_common::time::{Clock, SystemClock};

use crate::alert_muting::AlertMutingRuleResource;
use crate::config::{LoadError, ProviderConfig};

/// Explicitly constructed handle shared by every resource operation. Read-only
/// after construction.
#[derive(Clone)]
pub struct ProviderContext {
    client: Arc<SignalFxClient>,
    clock: Arc<dyn Clock>,
}

impl ProviderContext {
    pub fn configure(config: &ProviderConfig) -> Result<Self, LoadError> {
        config.validate()?;
        tracing::debug!(api_url = %config.api_url, "configuring provider");
        Ok(Self {
            client: Arc::new(SignalFxClient::new(config.client_config())),
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn client(&self) -> &SignalFxClient {
        &self.client
    }

    pub fn alert_muting_rule(&self) -> AlertMutingRuleResource<SignalFxClient> {
        AlertMutingRuleResource::with_clock(self.client.clone(), self.clock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resource;

    #[test]
    fn configure_rejects_missing_token() {
        let err = ProviderContext::configure(&ProviderConfig::default()).err().unwrap();
        assert!(err.to_string().contains("auth_token"));
    }

    #[test]
    fn configure_builds_client() {
        let cfg = ProviderConfig {
            auth_token: "tok".into(),
            api_url: "http://127.0.0.1:8090".into(),
        };
        let ctx = ProviderContext::configure(&cfg).unwrap();
        assert_eq!(ctx.client().config().api_url, "http://127.0.0.1:8090");
        assert_eq!(ctx.alert_muting_rule().type_name(), "signalfx_alert_muting_rule");
    }
}
