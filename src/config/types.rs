//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::{DocgenError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reflector invocation settings
    pub reflector: ReflectorConfig,

    /// Code-example collection settings
    pub examples: ExamplesConfig,
}

impl Config {
    /// Validate configuration values. Returns `DocgenError::Config` on
    /// failure.
    pub fn validate(&self) -> Result<()> {
        if self.reflector.bin.trim().is_empty() {
            return Err(DocgenError::Config(
                "reflector.bin must not be empty".to_string(),
            ));
        }

        for pattern in &self.reflector.exclude {
            glob::Pattern::new(pattern).map_err(|err| {
                DocgenError::Config(format!("Invalid reflector.exclude pattern '{pattern}': {err}"))
            })?;
        }

        if self.examples.dir.trim().is_empty() {
            return Err(DocgenError::Config(
                "examples.dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Reflector invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectorConfig {
    /// TypeDoc binary, resolved via PATH unless absolute
    pub bin: String,

    /// Globs excluded from analysis
    pub exclude: Vec<String>,
}

impl Default for ReflectorConfig {
    fn default() -> Self {
        Self {
            bin: constants::reflector::DEFAULT_BIN.to_string(),
            exclude: constants::reflector::EXCLUDE_GLOBS
                .iter()
                .map(|glob| glob.to_string())
                .collect(),
        }
    }
}

/// Code-example collection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamplesConfig {
    /// Directory of example snippets, relative to the project root
    pub dir: String,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            dir: constants::paths::CODE_EXAMPLES_DIR.to_string(),
        }
    }
}
