use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct MockApiConfig {
    pub addr: SocketAddr,
    pub auth_token: String,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8090)),
            auth_token: "mock-token".to_string(),
        }
    }
}

impl MockApiConfig {
    /// Overrides defaults with `SFX_MOCK_ADDR` and `SFX_MOCK_TOKEN`.
    pub fn from_env() -> Result<Self, String> {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("SFX_MOCK_ADDR") {
            cfg.addr = addr
                .parse()
                .map_err(|e| format!("SFX_MOCK_ADDR '{addr}': {e}"))?;
        }
        if let Ok(token) = std::env::var("SFX_MOCK_TOKEN") {
            if token.is_empty() {
                return Err("SFX_MOCK_TOKEN must not be empty".into());
            }
            cfg.auth_token = token;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_loopback() {
        let cfg = MockApiConfig::default();
        assert!(cfg.addr.ip().is_loopback());
        assert_eq!(cfg.addr.port(), 8090);
    }
}
