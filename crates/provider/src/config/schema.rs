use serde::{Deserialize, Serialize};

use signalfx_client::{ClientConfig, DEFAULT_API_URL};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProviderConfig {
    #[serde(default)]
    pub auth_token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl ProviderConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.auth_token.clone()).with_api_url(self.api_url.clone())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
