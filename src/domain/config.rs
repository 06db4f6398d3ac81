//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MEMBERS_URL, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint serving the JSON array of members
    pub members_url: String,
    /// Rows per table page
    pub page_size: usize,
    /// Initial UI language
    pub locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            members_url: DEFAULT_MEMBERS_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; absent keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the UI cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be greater than zero".to_string(),
            });
        }
        if self.members_url.trim().is_empty() {
            return Err(Error::Invalid {
                message: "members_url must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
