//! ConfigStore - Read-Only Configuration Loading
//!
//! Platform-specific locations:
//! - **Linux**: `~/.config/member-admin/member-admin.toml`
//! - **macOS**: `~/Library/Application Support/com.memberadmin.member-admin/member-admin.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\memberadmin\member-admin\config\member-admin.toml`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Path of the config file, without creating anything
pub fn config_path() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "memberadmin", "member-admin") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };
    Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load config from `path`; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    AppConfig::from_toml(&content)
}

/// Load config from the platform location, falling back to defaults on any error
pub fn load_config_or_default() -> AppConfig {
    let loaded = config_path().and_then(|path| {
        info!(path = ?path, "Loading config file");
        load_config_from(&path)
    });

    match loaded {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "Using default configuration");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("member-admin-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = scratch_dir("missing").join("absent.toml");
        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let path = scratch_dir("present").join(CONFIG_FILE_NAME);
        fs::write(&path, "page_size = 5\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.members_url, crate::constants::DEFAULT_MEMBERS_URL);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_file_is_an_error() {
        let path = scratch_dir("invalid").join(CONFIG_FILE_NAME);
        fs::write(&path, "page_size = 0\n").unwrap();
        assert!(load_config_from(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
