//! Reflection Driver
//!
//! Seam between the pipeline and the external static analyzer. The pipeline
//! only depends on the [`Reflector`] trait; the real implementation shells out
//! to the TypeDoc CLI, and tests inject a canned-document double.
//!
//! "No project" (source that does not compile, or nothing analyzable) is an
//! explicit `Ok(None)` signal, distinct from adapter failures like a missing
//! binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::json;
use tracing::{debug, info};

use crate::config::ReflectorConfig;
use crate::constants::reflector;
use crate::types::{DocgenError, ReflectionDocument, Result};

pub trait Reflector {
    /// Analyze the entry-point set. `Ok(None)` means the analyzer produced no
    /// project.
    fn reflect(&self, entry_points: &[String]) -> Result<Option<ReflectionDocument>>;
}

/// Fixed compiler profile handed to the analyzer.
#[derive(Debug, Clone)]
pub struct CompilerProfile {
    pub module: String,
    pub module_resolution: String,
    pub target: String,
    pub experimental_decorators: bool,
    pub resolve_json_module: bool,
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self {
            module: reflector::MODULE.to_string(),
            module_resolution: reflector::MODULE_RESOLUTION.to_string(),
            target: reflector::TARGET.to_string(),
            experimental_decorators: true,
            resolve_json_module: true,
        }
    }
}

/// Real adapter: drives the TypeDoc CLI and parses its JSON output.
pub struct TypedocReflector {
    workspace_root: PathBuf,
    bin: String,
    exclude: Vec<String>,
    profile: CompilerProfile,
}

impl TypedocReflector {
    pub fn new<P: AsRef<Path>>(workspace_root: P, config: &ReflectorConfig) -> Self {
        Self {
            workspace_root: workspace_root.as_ref().to_path_buf(),
            bin: config.bin.clone(),
            exclude: config.exclude.clone(),
            profile: CompilerProfile::default(),
        }
    }

    /// A minimal tsconfig carrying the fixed compiler profile, written into
    /// the scratch directory for the duration of one invocation.
    fn write_tsconfig(&self, scratch: &Path) -> Result<PathBuf> {
        let tsconfig = json!({
            "compilerOptions": {
                "experimentalDecorators": self.profile.experimental_decorators,
                "module": self.profile.module,
                "moduleResolution": self.profile.module_resolution,
                "target": self.profile.target,
                "resolveJsonModule": self.profile.resolve_json_module,
                "baseUrl": self.workspace_root,
            }
        });
        let path = scratch.join("tsconfig.json");
        fs::write(&path, serde_json::to_string_pretty(&tsconfig)?)?;
        Ok(path)
    }
}

impl Reflector for TypedocReflector {
    fn reflect(&self, entry_points: &[String]) -> Result<Option<ReflectionDocument>> {
        let scratch = tempfile::tempdir()?;
        let tsconfig = self.write_tsconfig(scratch.path())?;
        let output_path = scratch.path().join("reflection.json");

        let mut command = Command::new(&self.bin);
        command
            .current_dir(&self.workspace_root)
            .arg("--json")
            .arg(&output_path)
            .arg("--tsconfig")
            .arg(&tsconfig)
            .args([
                "--excludeExternals",
                "--excludeInternal",
                "--excludePrivate",
                "--excludeProtected",
            ]);
        for pattern in &self.exclude {
            command.arg("--exclude").arg(pattern);
        }
        for entry_point in entry_points {
            command.arg(entry_point);
        }

        info!(bin = %self.bin, entry_points = entry_points.len(), "running reflector");
        let output = command.output().map_err(|err| {
            DocgenError::Reflector(format!("Failed to launch '{}': {}", self.bin, err))
        })?;

        if !output.status.success() {
            debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "reflector exited unsuccessfully"
            );
            return Ok(None);
        }

        if !output_path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&output_path)?;
        let document = serde_json::from_str(&raw).map_err(|err| {
            DocgenError::Reflector(format!("Failed to parse reflector output: {}", err))
        })?;
        Ok(Some(document))
    }
}

/// Test double returning a canned document or the "no project" signal.
#[cfg(test)]
pub struct StaticReflector {
    document: Option<ReflectionDocument>,
}

#[cfg(test)]
impl StaticReflector {
    pub fn with_document(document: ReflectionDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Simulates an analyzer that produced no project.
    pub fn no_project() -> Self {
        Self { document: None }
    }
}

#[cfg(test)]
impl Reflector for StaticReflector {
    fn reflect(&self, _entry_points: &[String]) -> Result<Option<ReflectionDocument>> {
        Ok(self.document.clone())
    }
}
