//! Generate Command
//!
//! Owns the staged tree for one run: loads configuration and the workspace,
//! runs the pipeline, and commits the staged change-set only when every stage
//! succeeded. `--dry-run` stops before the commit and lists what would have
//! been written.

use std::path::PathBuf;

use crate::config::ConfigLoader;
use crate::pipeline::{self, TypedocReflector};
use crate::tree::StagedTree;
use crate::types::Result;
use crate::workspace::Workspace;

#[derive(Debug)]
pub struct GenerateOptions {
    /// Project to document; the workspace default when omitted
    pub project: Option<String>,
    /// Workspace root directory
    pub workspace_root: PathBuf,
    /// Run the pipeline without committing the staged tree
    pub dry_run: bool,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let config = ConfigLoader::load(&options.workspace_root)?;
    let mut tree = StagedTree::new(&options.workspace_root);
    let workspace = Workspace::load(&tree)?;
    let reflector = TypedocReflector::new(&options.workspace_root, &config.reflector);

    let summary = pipeline::generate(
        &mut tree,
        &reflector,
        &config,
        &workspace,
        options.project.as_deref(),
    )?;

    println!(
        "Documented '{}': {} entry point(s), {} declaration(s), {} anchor id(s), {} code example(s)",
        summary.project,
        summary.entry_points,
        summary.declarations,
        summary.anchor_ids,
        summary.code_examples,
    );

    if options.dry_run {
        println!("Dry run; staged files were not committed:");
        for path in tree.staged_paths() {
            println!("  {}", path);
        }
        return Ok(());
    }

    tree.commit()?;
    println!("Wrote {}", summary.artifact_path);
    Ok(())
}
