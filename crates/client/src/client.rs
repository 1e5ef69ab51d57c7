use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use signalfx_common::{AlertMutingRule, CreateUpdateAlertMutingRuleRequest};

use crate::{AlertMutingApi, ClientConfig, ClientError};

const ALERT_MUTING_PATH: &str = "/v2/alertmuting";
const TOKEN_HEADER: &str = "X-SF-Token";

pub struct SignalFxClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl SignalFxClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Collection URL, or the URL of one rule when `id` is given. The id is
    /// always a single percent-encoded path segment.
    fn rule_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let base = format!("{}{ALERT_MUTING_PATH}", self.config.base_url());
        let mut url = Url::parse(&base).map_err(|e| {
            ClientError::InvalidRequest(format!("api_url '{}': {e}", self.config.api_url))
        })?;
        if let Some(id) = id {
            if id.is_empty() || id == "." || id == ".." {
                return Err(ClientError::InvalidRequest(format!("invalid rule id '{id}'")));
            }
            url.path_segments_mut()
                .map_err(|_| {
                    ClientError::InvalidRequest(format!(
                        "api_url '{}' cannot carry a path",
                        self.config.api_url
                    ))
                })?
                .push(id);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(TOKEN_HEADER, &self.config.auth_token)
    }

    async fn send(&self, path: &str, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %path, %body, "request rejected");
        Err(ClientError::from_status(status.as_u16(), path, body))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = self.send(path, req).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AlertMutingApi for SignalFxClient {
    async fn create_alert_muting_rule(
        &self,
        payload: &CreateUpdateAlertMutingRuleRequest,
    ) -> Result<AlertMutingRule, ClientError> {
        let url = self.rule_url(None)?;
        let path = url.path().to_string();
        let req = self.request(Method::POST, url).json(payload);
        self.send_json(&path, req).await
    }

    async fn get_alert_muting_rule(&self, id: &str) -> Result<AlertMutingRule, ClientError> {
        let url = self.rule_url(Some(id))?;
        let path = url.path().to_string();
        let req = self.request(Method::GET, url);
        self.send_json(&path, req).await
    }

    async fn update_alert_muting_rule(
        &self,
        id: &str,
        payload: &CreateUpdateAlertMutingRuleRequest,
    ) -> Result<AlertMutingRule, ClientError> {
        let url = self.rule_url(Some(id))?;
        let path = url.path().to_string();
        let req = self.request(Method::PUT, url).json(payload);
        self.send_json(&path, req).await
    }

    async fn delete_alert_muting_rule(&self, id: &str) -> Result<(), ClientError> {
        let url = self.rule_url(Some(id))?;
        let path = url.path().to_string();
        let req = self.request(Method::DELETE, url);
        self.send(&path, req).await?;
        Ok(())
    }
}
