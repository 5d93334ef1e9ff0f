//! Project Metadata
//!
//! Read-only descriptor for a workspace project, resolved once per invocation
//! from the workspace configuration. Carries the conventional paths the
//! pipeline reads from.

use serde::{Deserialize, Serialize};

use crate::constants::paths;
use crate::tree::normalize_path;

/// Declared project type in the workspace configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Library,
    Application,
}

/// A resolved workspace project. Never mutated after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Project name as declared in the workspace configuration
    pub name: String,
    /// Project root, workspace-relative
    pub root: String,
    /// Source root, workspace-relative (defaults to `<root>/src`)
    pub source_root: String,
    /// Declared project type
    pub project_type: ProjectType,
}

impl ProjectDescriptor {
    /// Canonical public-API entry point: `<sourceRoot>/public-api.ts`.
    pub fn public_api_path(&self) -> String {
        normalize_path(&format!("{}/{}", self.source_root, paths::PUBLIC_API_FILE))
    }

    /// Packaging manifest carrying the output `dest` field.
    pub fn ng_package_path(&self) -> String {
        normalize_path(&format!("{}/{}", self.root, paths::NG_PACKAGE_MANIFEST))
    }

    /// Manifest carrying the published package name.
    pub fn package_manifest_path(&self) -> String {
        normalize_path(&format!(
            "{}/{}/{}",
            paths::PROJECTS_DIR,
            self.name,
            paths::PACKAGE_MANIFEST
        ))
    }

    /// Internal import path that code examples reference before rewriting.
    pub fn internal_import_path(&self) -> String {
        format!("{}/{}/src/public-api", paths::PROJECTS_DIR, self.name)
    }
}
