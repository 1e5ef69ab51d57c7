use anyhow::{Context, Result};
use signalfx_provider::config::{load_from_file, ProviderConfig};
use signalfx_provider::{AlertMutingRuleConfig, ProviderContext};
use std::path::{Path, PathBuf};

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("signalfx").join("provider.yml");
    }
    PathBuf::from("/etc/signalfx/provider.yml")
}

/// Loads the provider config. An explicit path must exist; a missing default
/// file yields defaults so flags and env can supply everything.
pub fn load_config(config_path: Option<&str>) -> Result<ProviderConfig> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => {
            let path = default_config_path();
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no provider config, using defaults");
                return Ok(ProviderConfig::default());
            }
            path
        }
    };

    load_from_file(&path).with_context(|| format!("loading config from {}", path.display()))
}

pub fn resolve_config(
    api_url_flag: Option<&str>,
    token_flag: Option<&str>,
    config_path: Option<&str>,
) -> Result<ProviderConfig> {
    let mut cfg = load_config(config_path)?;
    if let Some(url) = api_url_flag {
        cfg.api_url = url.to_string();
    }
    if let Some(token) = token_flag {
        cfg.auth_token = token.to_string();
    }
    Ok(cfg)
}

pub fn context(opts: &crate::Opts) -> Result<ProviderContext> {
    let cfg = resolve_config(
        opts.api_url.as_deref(),
        opts.token.as_deref(),
        opts.config.as_deref(),
    )?;
    ProviderContext::configure(&cfg).context("configuring provider")
}

pub fn load_declaration(path: &Path) -> Result<AlertMutingRuleConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading declaration {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing declaration {}", path.display()))
}
