use crate::core::error::GitPanesError;
use std::path::PathBuf;

/// Directory holding `config.json` and the interactive session log.
pub fn get_config_directory() -> Result<PathBuf, GitPanesError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(GitPanesError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .ok_or(GitPanesError::ConfigDirectoryNotFound)?
            .join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(GitPanesError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("git-panes"))
}
