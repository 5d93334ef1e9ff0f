//! Document Assembly
//!
//! Resolves the artifact path from the project's packaging manifest and stages
//! the final `documentation.json`: created empty when absent, then populated
//! field by field and re-serialized with 2-space indentation. The write lands
//! in the staged tree only; committing is the caller's decision.

use serde_json::Value;
use tracing::info;

use crate::constants::paths;
use crate::tree::{StagedTree, normalize_path};
use crate::types::{
    AnchorIdMap, CodeExample, DocgenError, DocumentationJson, ProjectDescriptor,
    ReflectionDocument, Result,
};

/// Stage the artifact. Returns its tree-relative path.
pub fn write_artifact(
    tree: &mut StagedTree,
    project: &ProjectDescriptor,
    anchor_ids: AnchorIdMap,
    typedoc: ReflectionDocument,
    code_examples: Vec<CodeExample>,
) -> Result<String> {
    let artifact_path = artifact_path(tree, project)?;

    if !tree.exists(&artifact_path) {
        tree.create(&artifact_path, "{}")?;
    }

    let mut document: DocumentationJson = serde_json::from_str(&tree.read(&artifact_path)?)?;
    document.anchor_ids = Some(anchor_ids);
    document.typedoc = Some(typedoc);
    document.code_examples = Some(code_examples);

    let mut serialized = serde_json::to_string_pretty(&document)?;
    serialized.push('\n');
    tree.overwrite(&artifact_path, serialized)?;

    info!(path = %artifact_path, "staged documentation artifact");
    Ok(artifact_path)
}

/// `<project-root>/<ng-package dest>/documentation.json`, normalized.
pub fn artifact_path(tree: &StagedTree, project: &ProjectDescriptor) -> Result<String> {
    let manifest_path = project.ng_package_path();
    let raw = tree.read(&manifest_path)?;
    let manifest: Value = serde_json::from_str(&raw)?;
    let dest = manifest
        .get("dest")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            DocgenError::Workspace(format!("{} is missing a 'dest' field", manifest_path))
        })?;

    Ok(normalize_path(&format!(
        "{}/{}/{}",
        project.root,
        dest,
        paths::DOCUMENTATION_FILE
    )))
}
