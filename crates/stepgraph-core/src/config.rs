//! Engine configuration for stepgraph
//!
//! Stored as TOML. The file is found by, in order: an explicit path, the
//! `STEPGRAPH_CONFIG_DIR` directory, and `stepgraph/config.toml` under the
//! platform config directory. Without a file the defaults apply.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StepGraphError};

pub use types::{
    AstarConfig, BellmanFordConfig, DijkstraConfig, EngineConfig, RegistryConfig, RunDefaults,
};

const CONFIG_DIR: &str = "stepgraph";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "STEPGRAPH_CONFIG_DIR";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                StepGraphError::not_found("config file", path.display())
            }
            _ => StepGraphError::Io(e),
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), disabled = config.registry.disabled.len(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StepGraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path must exist; the discovered locations are optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Location of the implicit config file, if a config directory is known
pub fn default_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
