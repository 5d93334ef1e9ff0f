//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Workspace config (`ngdocgen.toml` at the workspace root)
//! 3. Environment variables (NGDOCGEN_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{DocgenError, Result};

/// Configuration file name at the workspace root
pub const CONFIG_FILE: &str = "ngdocgen.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → workspace config → env vars
    pub fn load(workspace_root: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let config_path = Self::workspace_config_path(workspace_root);
        if config_path.exists() {
            debug!("Loading workspace config from: {}", config_path.display());
            figment = figment.merge(Toml::file(&config_path));
        }

        // e.g. NGDOCGEN_REFLECTOR_BIN -> reflector.bin
        figment = figment.merge(Env::prefixed("NGDOCGEN_").split("_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|err| DocgenError::Config(format!("Configuration error: {}", err)))?;

        config.validate()?;

        Ok(config)
    }

    /// Path of the workspace config file
    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(CONFIG_FILE)
    }
}
