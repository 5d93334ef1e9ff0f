//! Entry-Point Discovery
//!
//! The reflector only sees declarations reachable from the files it is handed.
//! Component and directive sources that are not exported from `public-api.ts`
//! would silently drop out of the documentation, so the scan below promotes
//! them to supplementary entry points and warns about each one.
//!
//! Reachability is a textual substring check on the public-API file's raw
//! contents, not a semantic import-graph walk. Cheap, and false positives only
//! produce a redundant entry point.

use tracing::warn;

use crate::constants::entry_points;
use crate::tree::StagedTree;
use crate::types::{ProjectDescriptor, Result};

/// Ordered, distinct entry-point paths. The canonical public-API file is
/// always first.
#[derive(Debug, Clone)]
pub struct EntryPointSet {
    files: Vec<String>,
}

impl EntryPointSet {
    pub fn paths(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Supplementary entry points beyond the canonical file.
    pub fn supplementary(&self) -> &[String] {
        &self.files[1..]
    }
}

/// Scan the project's source tree for component/directive files not reachable
/// from the public-API file.
pub fn discover(tree: &StagedTree, project: &ProjectDescriptor) -> Result<EntryPointSet> {
    let canonical = project.public_api_path();
    let public_api_text = tree.read(&canonical)?;

    let mut files = vec![canonical.clone()];

    let source_prefix = format!("{}/", project.source_root);
    for path in tree.visit(&project.source_root)? {
        if path == canonical || !matches_entry_point(&path) {
            continue;
        }

        let fragment = path
            .strip_prefix(&source_prefix)
            .unwrap_or(&path)
            .trim_end_matches(".ts");

        if public_api_text.contains(fragment) {
            continue;
        }

        if files.contains(&path) {
            continue;
        }

        warn!(
            file = %path,
            "not exported from {}; adding it as a supplementary entry point",
            canonical
        );
        files.push(path);
    }

    Ok(EntryPointSet { files })
}

fn matches_entry_point(path: &str) -> bool {
    if !entry_points::SUFFIXES.iter().any(|s| path.ends_with(s)) {
        return false;
    }
    !path
        .split('/')
        .any(|segment| entry_points::EXCLUDED_DIRS.contains(&segment))
}
