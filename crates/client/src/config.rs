pub const DEFAULT_API_URL: &str = "https://api.signalfx.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub auth_token: String,
}

impl ClientConfig {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: auth_token.into(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_api() {
        let cfg = ClientConfig::new("tok");
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.auth_token, "tok");
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let cfg = ClientConfig::new("tok").with_api_url("http://127.0.0.1:9000/");
        assert_eq!(cfg.base_url(), "http://127.0.0.1:9000");
    }
}
