use std::fs;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::caps::CapabilitySet;
use crate::nav::NavNode;

use super::ConfigError;

fn default_home_href() -> String {
    "/".to_string()
}

fn default_fallback_title() -> String {
    "Page".to_string()
}

/// On-disk navigation config: the tree plus the knobs the resolver and
/// the capability filter need.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_home_href")]
    pub home_href: String,

    /// Label used when the current path matches nothing in the tree.
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,

    /// Enabled module capabilities.
    #[serde(default)]
    pub modules: Vec<String>,

    #[serde(default)]
    pub nav: Vec<NavNode>,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            home_href: default_home_href(),
            fallback_title: default_fallback_title(),
            modules: Vec::new(),
            nav: Vec::new(),
        }
    }
}

impl NavConfig {
    pub fn capability_set(&self) -> CapabilitySet {
        self.modules.iter().cloned().collect()
    }
}

/// Load a navigation config, picking the parser by file extension.
/// `.toml` and `.json` are supported; anything else is an error rather
/// than a guess.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let raw = fs::read_to_string(path)?;
    let config = match ext.as_deref() {
        Some("toml") => toml::from_str(&raw)?,
        Some("json") => serde_json::from_str(&raw)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), "loaded navigation config");
    Ok(config)
}

/// Per-user default config location (`nav.toml` inside the project
/// config dir). `None` when the platform gives us no home directory.
pub fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "navTrail")?;
    Some(dirs.config_dir().join("nav.toml"))
}
