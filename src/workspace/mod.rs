//! Workspace Resolution
//!
//! Parses the workspace configuration (`angular.json`) and resolves a named
//! project, or the configured default project, into a [`ProjectDescriptor`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::constants::paths;
use crate::tree::{StagedTree, normalize_path};
use crate::types::{DocgenError, ProjectDescriptor, ProjectType, Result};

#[derive(Debug, Deserialize)]
struct WorkspaceConfig {
    #[serde(rename = "defaultProject")]
    default_project: Option<String>,

    #[serde(default)]
    projects: BTreeMap<String, WorkspaceProject>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceProject {
    root: String,

    #[serde(rename = "sourceRoot")]
    source_root: Option<String>,

    #[serde(rename = "projectType")]
    project_type: ProjectType,
}

/// Parsed workspace configuration.
#[derive(Debug)]
pub struct Workspace {
    config: WorkspaceConfig,
}

impl Workspace {
    /// Load and parse the workspace configuration from the tree.
    pub fn load(tree: &StagedTree) -> Result<Self> {
        let raw = tree.read(paths::WORKSPACE_CONFIG)?;
        let config: WorkspaceConfig = serde_json::from_str(&raw).map_err(|err| {
            DocgenError::Workspace(format!(
                "Failed to parse {}: {}",
                paths::WORKSPACE_CONFIG,
                err
            ))
        })?;
        Ok(Self { config })
    }

    /// Project names with their declared types, in sorted order.
    pub fn projects(&self) -> impl Iterator<Item = (&str, ProjectType)> {
        self.config
            .projects
            .iter()
            .map(|(name, project)| (name.as_str(), project.project_type))
    }

    /// Resolve a project by name, falling back to the workspace's default
    /// project when no name is given.
    pub fn resolve(&self, name: Option<&str>) -> Result<ProjectDescriptor> {
        let name = match name {
            Some(name) => name,
            None => self.config.default_project.as_deref().ok_or_else(|| {
                DocgenError::Workspace(
                    "No project specified and the workspace declares no default project"
                        .to_string(),
                )
            })?,
        };

        let project = self.config.projects.get(name).ok_or_else(|| {
            DocgenError::Workspace(format!("Project '{}' not found in the workspace", name))
        })?;

        let root = normalize_path(&project.root);
        let source_root = project
            .source_root
            .as_deref()
            .map(normalize_path)
            .unwrap_or_else(|| normalize_path(&format!("{}/src", root)));

        Ok(ProjectDescriptor {
            name: name.to_string(),
            root,
            source_root,
            project_type: project.project_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const WORKSPACE_JSON: &str = r#"{
  "version": 1,
  "defaultProject": "my-lib",
  "projects": {
    "my-lib": {
      "root": "projects/my-lib",
      "sourceRoot": "projects/my-lib/src",
      "projectType": "library"
    },
    "my-app": {
      "root": "projects/my-app",
      "projectType": "application"
    }
  }
}"#;

    fn workspace() -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("angular.json"), WORKSPACE_JSON).unwrap();
        let tree = StagedTree::new(dir.path());
        let workspace = Workspace::load(&tree).unwrap();
        (dir, workspace)
    }

    #[test]
    fn test_resolve_named_project() {
        let (_dir, workspace) = workspace();
        let project = workspace.resolve(Some("my-lib")).unwrap();
        assert_eq!(project.name, "my-lib");
        assert_eq!(project.root, "projects/my-lib");
        assert_eq!(project.source_root, "projects/my-lib/src");
        assert_eq!(project.project_type, ProjectType::Library);
    }

    #[test]
    fn test_resolve_falls_back_to_default_project() {
        let (_dir, workspace) = workspace();
        let project = workspace.resolve(None).unwrap();
        assert_eq!(project.name, "my-lib");
    }

    #[test]
    fn test_source_root_defaults_to_root_slash_src() {
        let (_dir, workspace) = workspace();
        let project = workspace.resolve(Some("my-app")).unwrap();
        assert_eq!(project.source_root, "projects/my-app/src");
        assert_eq!(project.project_type, ProjectType::Application);
    }

    #[test]
    fn test_unknown_project_is_an_error() {
        let (_dir, workspace) = workspace();
        assert!(matches!(
            workspace.resolve(Some("nope")),
            Err(DocgenError::Workspace(_))
        ));
    }

    #[test]
    fn test_missing_default_project_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("angular.json"),
            r#"{ "projects": { "a": { "root": "a", "projectType": "library" } } }"#,
        )
        .unwrap();
        let tree = StagedTree::new(dir.path());
        let workspace = Workspace::load(&tree).unwrap();
        assert!(matches!(
            workspace.resolve(None),
            Err(DocgenError::Workspace(_))
        ));
    }

    #[test]
    fn test_project_listing_is_sorted() {
        let (_dir, workspace) = workspace();
        let names: Vec<&str> = workspace.projects().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["my-app", "my-lib"]);
    }
}
