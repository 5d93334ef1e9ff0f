//! Documentation Pipeline
//!
//! Strictly sequential, single-pass pipeline:
//! resolve project → discover entry points → reflect → normalize →
//! collect examples → assemble.
//!
//! Every stage reads and writes through the staged tree; nothing reaches disk
//! until the caller commits. A failure at any stage aborts the run end-to-end
//! with no partial artifact.

pub mod assemble;
pub mod code_examples;
pub mod entry_points;
pub mod normalize;
pub mod reflector;

pub use entry_points::EntryPointSet;
pub use reflector::{CompilerProfile, Reflector, TypedocReflector};

use tracing::info;

use crate::config::Config;
use crate::tree::StagedTree;
use crate::types::{DocgenError, ProjectType, Result};
use crate::workspace::Workspace;

/// Counts reported after a successful run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub project: String,
    pub entry_points: usize,
    pub declarations: usize,
    pub anchor_ids: usize,
    pub code_examples: usize,
    pub artifact_path: String,
}

/// Run the full pipeline against one project, staging the artifact into
/// `tree`. The caller commits the tree only on success.
pub fn generate(
    tree: &mut StagedTree,
    reflector: &dyn Reflector,
    config: &Config,
    workspace: &Workspace,
    project_name: Option<&str>,
) -> Result<GenerationSummary> {
    let project = workspace.resolve(project_name)?;
    if project.project_type != ProjectType::Library {
        return Err(DocgenError::NotALibrary);
    }

    let entry_points = entry_points::discover(tree, &project)?;
    info!(
        project = %project.name,
        entry_points = entry_points.len(),
        supplementary = entry_points.supplementary().len(),
        "discovered entry points"
    );

    let document = reflector
        .reflect(entry_points.paths())?
        .ok_or_else(|| DocgenError::AnalysisFailed {
            project: project.name.clone(),
        })?;

    let mut document = normalize::flatten_entry_points(document, entry_points.len());
    normalize::repair_aliases(&mut document);
    let anchor_ids = normalize::anchor_ids(&document);

    let examples = code_examples::collect(tree, &project, &config.examples.dir)?;

    let summary_counts = (
        document.children().len(),
        anchor_ids.len(),
        examples.len(),
    );
    let artifact_path = assemble::write_artifact(tree, &project, anchor_ids, document, examples)?;

    let (declarations, anchor_count, example_count) = summary_counts;
    info!(
        project = %project.name,
        declarations,
        anchor_ids = anchor_count,
        code_examples = example_count,
        artifact = %artifact_path,
        "documentation generated"
    );

    Ok(GenerationSummary {
        project: project.name,
        entry_points: entry_points.len(),
        declarations,
        anchor_ids: anchor_count,
        code_examples: example_count,
        artifact_path,
    })
}
