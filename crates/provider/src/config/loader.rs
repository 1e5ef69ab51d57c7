use std::path::Path;
use super::schema::ProviderConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<ProviderConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Parses without validating; the auth token is commonly supplied later
/// from the environment.
pub fn load_from_str(yaml: &str) -> Result<ProviderConfig, LoadError> {
    Ok(serde_yaml::from_str(yaml)?)
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.auth_token.is_empty() {
            return Err(LoadError::Validation("auth_token must not be empty".into()));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(LoadError::Validation(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }
}
