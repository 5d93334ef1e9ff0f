//! Code-Example Collection
//!
//! Gathers raw source text for every snippet under the project's
//! code-examples directory. Snippets import the library through its internal
//! source path; consumers see the published package, so every quoted
//! occurrence of `projects/<name>/src/public-api` is rewritten to the package
//! name read from the library's manifest.
//!
//! An absent directory is not an error; it simply yields zero examples.

use serde_json::Value;
use tracing::debug;

use crate::tree::{StagedTree, normalize_path};
use crate::types::{CodeExample, DocgenError, ProjectDescriptor, Result};

/// Collect every file under `<project-root>/<examples_dir>`, in deterministic
/// lexicographic visit order.
pub fn collect(
    tree: &StagedTree,
    project: &ProjectDescriptor,
    examples_dir: &str,
) -> Result<Vec<CodeExample>> {
    let package_name = published_package_name(tree, project)?;
    let internal_path = project.internal_import_path();

    let dir = normalize_path(&format!("{}/{}", project.root, examples_dir));
    let mut examples = Vec::new();

    for path in tree.visit(&dir)? {
        let raw = tree.read(&path)?;
        let rewritten = rewrite_imports(&raw, &internal_path, &package_name);

        let file_name = path
            .rsplit('/')
            .next()
            .unwrap_or(path.as_str())
            .to_string();

        debug!(file = %path, "collected code example");
        examples.push(CodeExample {
            file_name,
            file_path: path,
            raw_contents: rewritten,
        });
    }

    Ok(examples)
}

/// The published package identifier from `projects/<name>/package.json`.
fn published_package_name(tree: &StagedTree, project: &ProjectDescriptor) -> Result<String> {
    let manifest_path = project.package_manifest_path();
    let raw = tree.read(&manifest_path)?;
    let manifest: Value = serde_json::from_str(&raw)?;
    manifest
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            DocgenError::Workspace(format!("{} is missing a 'name' field", manifest_path))
        })
}

/// Replace quoted occurrences of the internal import path, either quote style.
fn rewrite_imports(contents: &str, internal_path: &str, package_name: &str) -> String {
    contents
        .replace(
            &format!("'{}'", internal_path),
            &format!("'{}'", package_name),
        )
        .replace(
            &format!("\"{}\"", internal_path),
            &format!("\"{}\"", package_name),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;
    use std::fs;
    use tempfile::TempDir;

    fn scaffold(examples: &[(&str, &str)]) -> (TempDir, ProjectDescriptor) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("projects/my-lib");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("package.json"), r#"{ "name": "my-lib" }"#).unwrap();
        for (name, contents) in examples {
            let path = root.join("documentation/code-examples").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        }
        let project = ProjectDescriptor {
            name: "my-lib".to_string(),
            root: "projects/my-lib".to_string(),
            source_root: "projects/my-lib/src".to_string(),
            project_type: ProjectType::Library,
        };
        (dir, project)
    }

    #[test]
    fn test_rewrites_single_quoted_imports() {
        let (dir, project) = scaffold(&[(
            "foo.component.ts",
            "import { MyLibService } from 'projects/my-lib/src/public-api';\n",
        )]);
        let tree = StagedTree::new(dir.path());

        let examples = collect(&tree, &project, "documentation/code-examples").unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].file_name, "foo.component.ts");
        assert_eq!(
            examples[0].file_path,
            "projects/my-lib/documentation/code-examples/foo.component.ts"
        );
        assert_eq!(
            examples[0].raw_contents,
            "import { MyLibService } from 'my-lib';\n"
        );
    }

    #[test]
    fn test_rewrites_double_quoted_imports() {
        let (dir, project) = scaffold(&[(
            "bar.component.ts",
            "import { MyLibService } from \"projects/my-lib/src/public-api\";\n",
        )]);
        let tree = StagedTree::new(dir.path());

        let examples = collect(&tree, &project, "documentation/code-examples").unwrap();
        assert_eq!(
            examples[0].raw_contents,
            "import { MyLibService } from \"my-lib\";\n"
        );
    }

    #[test]
    fn test_file_without_internal_import_is_verbatim() {
        let contents = "import { Component } from '@angular/core';\n";
        let (dir, project) = scaffold(&[("plain.component.ts", contents)]);
        let tree = StagedTree::new(dir.path());

        let examples = collect(&tree, &project, "documentation/code-examples").unwrap();
        assert_eq!(examples[0].raw_contents, contents);
    }

    #[test]
    fn test_absent_directory_yields_zero_examples() {
        let (dir, project) = scaffold(&[]);
        let tree = StagedTree::new(dir.path());

        let examples = collect(&tree, &project, "documentation/code-examples").unwrap();
        assert!(examples.is_empty());
    }

    #[test]
    fn test_order_is_lexicographic() {
        let (dir, project) = scaffold(&[
            ("b.component.ts", ""),
            ("a.component.ts", ""),
            ("nested/c.component.ts", ""),
        ]);
        let tree = StagedTree::new(dir.path());

        let examples = collect(&tree, &project, "documentation/code-examples").unwrap();
        let names: Vec<&str> = examples.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.component.ts", "b.component.ts", "c.component.ts"]);
    }

    #[test]
    fn test_missing_package_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("projects/my-lib")).unwrap();
        let project = ProjectDescriptor {
            name: "my-lib".to_string(),
            root: "projects/my-lib".to_string(),
            source_root: "projects/my-lib/src".to_string(),
            project_type: ProjectType::Library,
        };
        let tree = StagedTree::new(dir.path());
        assert!(matches!(
            collect(&tree, &project, "documentation/code-examples"),
            Err(DocgenError::MissingFile { .. })
        ));
    }
}
