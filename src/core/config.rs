//! User configuration stored as JSON in the config directory.
//!
//! Every field has a default, so a partial or missing file still yields a
//! usable [`Config`].

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitPanesError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of commits requested from `git log`.
    pub log_limit: usize,
    /// Remote used by push, pull and the remote-branch checks.
    pub remote: String,
    /// Editor command; falls back to `$VISUAL`, `$EDITOR`, then `vi`.
    pub editor: Option<String>,
    /// Extensions opened in the editor from the status view. Other paths are revealed.
    pub source_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_limit: 100,
            remote: "origin".to_string(),
            editor: None,
            source_extensions: [
                "rs", "cs", "toml", "md", "txt", "json", "yaml", "yml", "c", "h", "cpp", "py",
                "js", "ts",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        }
    }
}

impl Config {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    pub fn load_or_create() -> Result<Self> {
        let config_file = Self::config_file()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            let config = Self::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitPanesError::config_read_failed(path, e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| GitPanesError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| GitPanesError::config_write_failed(dir, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| GitPanesError::config_write_failed(path, e))?;
        log::debug!("Wrote config to {}", path.display());
        Ok(())
    }

    /// Editor command to launch, resolved against the environment.
    pub fn editor_command(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|editor| !editor.trim().is_empty())
            .unwrap_or_else(|| "vi".to_string())
    }

    pub fn is_source_file(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.source_extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }

    /// Prefix that marks a branch as living on the configured remote.
    pub fn remote_prefix(&self) -> String {
        format!("{}/", self.remote)
    }
}
