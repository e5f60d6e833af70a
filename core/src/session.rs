//! # Test Session
//!
//! Everything a run needs is resolved exactly once, up front, and handed to
//! page objects as an explicit [`Session`] value.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use nodeprobe_common::config::{Config, Settings};
use nodeprobe_common::error::Result;
use nodeprobe_common::network::identity::NetworkIdentity;
use nodeprobe_common::router::page::{Page, RouterTarget};
use nodeprobe_common::system::InterfaceSource;

use crate::resolver;

pub const SETTINGS_FILE: &str = "nodeprobe.toml";
pub const SETTINGS_TEMPLATE: &str = "example-nodeprobe.toml";

/// Makes sure `path` exists, copying the example template that sits next
/// to it when it does not.
///
/// Returns whether a settings file is available afterwards. Failing to
/// copy is not fatal; the caller falls back to defaults.
pub fn bootstrap_settings(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }

    warn!("{} not found", path.display());
    let template: PathBuf = path.with_file_name(SETTINGS_TEMPLATE);
    if !template.is_file() {
        warn!("No {} to copy from, using defaults", template.display());
        return false;
    }

    info!("Creating {} from {}", path.display(), template.display());
    match fs::copy(&template, path) {
        Ok(_) => true,
        Err(e) => {
            warn!("Error creating {}: {e}", path.display());
            false
        }
    }
}

/// Loads settings from `path`, bootstrapping it first if needed.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !bootstrap_settings(path) {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)?;
    Settings::from_toml(&raw)
}

/// Resolved, read-only state shared by every check in a run.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    identity: NetworkIdentity,
    target: RouterTarget,
}

impl Session {
    /// Resolves the network identity and fixes the router target.
    ///
    /// A resolution failure aborts the whole run; there is nothing useful
    /// any check could do without a node address.
    pub fn start(config: Config, source: &dyn InterfaceSource) -> anyhow::Result<Self> {
        let identity = resolver::resolve(source, &config.prefix).with_context(|| {
            format!("could not resolve a node for address prefix {}", config.prefix)
        })?;
        let target = RouterTarget::new(&identity, &config.scheme);
        info!("Router admin interface expected at {}", target.url(Page::Home));

        Ok(Self {
            config,
            identity,
            target,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn identity(&self) -> &NetworkIdentity {
        &self.identity
    }

    pub fn target(&self) -> &RouterTarget {
        &self.target
    }
}
