//! List-Projects Command

use std::path::Path;

use crate::tree::StagedTree;
use crate::types::{ProjectType, Result};
use crate::workspace::Workspace;

pub fn run(workspace_root: &Path) -> Result<()> {
    let tree = StagedTree::new(workspace_root);
    let workspace = Workspace::load(&tree)?;

    for (name, project_type) in workspace.projects() {
        let kind = match project_type {
            ProjectType::Library => "library",
            ProjectType::Application => "application",
        };
        println!("{}  ({})", name, kind);
    }

    Ok(())
}
