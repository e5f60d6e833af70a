use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::prefix::AddressPrefix;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_REVISION: &str = "Commotion Router Release 1.1rc2";
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Leading octets that identify the router's private network.
    pub prefix: AddressPrefix,
    /// URL scheme used to reach the admin interface.
    pub scheme: String,
    /// Revision string the page footer is expected to show.
    pub expected_revision: String,
    /// How long a page may take to show its landmark.
    pub page_timeout: Duration,
    /// 0 prints everything, 1 drops decoration, 2 prints bare values.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Settings::default().into_config(0)
    }
}

/// On-disk settings, `nodeprobe.toml`.
///
/// Every field is optional; missing values fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub network: NetworkSettings,
    pub router: RouterSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    pub prefix: AddressPrefix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    pub scheme: String,
    pub revision: String,
    pub page_timeout_secs: u64,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            revision: DEFAULT_REVISION.to_string(),
            page_timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn into_config(self, quiet: u8) -> Config {
        Config {
            prefix: self.network.prefix,
            scheme: self.router.scheme,
            expected_revision: self.router.revision,
            page_timeout: Duration::from_secs(self.router.page_timeout_secs),
            quiet,
        }
    }
}
