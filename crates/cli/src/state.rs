//! The JSON file tracking the single managed rule between invocations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use signalfx_provider::alert_muting::TYPE_NAME;
use signalfx_provider::ResourceData;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub version: u32,
    pub resource_type: String,
    #[serde(default)]
    pub resource: Option<ResourceData>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            resource_type: TYPE_NAME.to_string(),
            resource: None,
        }
    }
}

impl StateFile {
    pub fn with_resource(data: ResourceData) -> Self {
        Self {
            resource: Some(data),
            ..Self::default()
        }
    }

    /// The tracked resource, only when it still has a remote id.
    pub fn tracked(&self) -> Option<&ResourceData> {
        self.resource.as_ref().filter(|r| r.id().is_some())
    }
}

pub fn load(path: &Path) -> Result<StateFile> {
    if !path.exists() {
        return Ok(StateFile::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading state {}", path.display()))?;
    let state: StateFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing state {}", path.display()))?;
    if state.resource_type != TYPE_NAME {
        anyhow::bail!(
            "state {} tracks '{}', expected '{}'",
            path.display(),
            state.resource_type,
            TYPE_NAME
        );
    }
    Ok(state)
}

/// Writes and syncs a sibling temp file, then renames it over `path`, so a
/// crash never leaves a truncated state behind.
pub fn save(path: &Path, state: &StateFile) -> Result<()> {
    let json = serde_json::to_vec_pretty(state)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut f = File::create(&tmp).with_context(|| format!("writing {}", tmp.display()))?;
    f.write_all(&json)?;
    f.sync_all()?;
    drop(f);

    std::fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}
