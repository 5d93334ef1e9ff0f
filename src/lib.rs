//! ngdocgen - Documentation JSON Generator for Angular Library Workspaces
//!
//! Drives an external documentation-extraction tool (TypeDoc) against a
//! library's public API and persists a structured `documentation.json`
//! artifact: the reflection tree, anchor-link identifiers for same-page
//! navigation, and raw source text for embedded usage examples.
//!
//! ## Pipeline
//!
//! resolve project → discover entry points → reflect → normalize →
//! collect examples → assemble & commit
//!
//! All file edits accumulate in an in-memory [`StagedTree`] and land on disk
//! only through a single commit after every stage succeeded; a failed run
//! leaves the workspace untouched.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ngdocgen::{Config, StagedTree, TypedocReflector, Workspace, pipeline};
//!
//! let config = Config::default();
//! let mut tree = StagedTree::new(&workspace_root);
//! let workspace = Workspace::load(&tree)?;
//! let reflector = TypedocReflector::new(&workspace_root, &config.reflector);
//! let summary = pipeline::generate(&mut tree, &reflector, &config, &workspace, None)?;
//! tree.commit()?;
//! ```
//!
//! ## Modules
//!
//! - [`tree`]: staged file overlay with atomic commit
//! - [`workspace`]: workspace configuration and project resolution
//! - [`pipeline`]: entry-point discovery, reflection, normalization, assembly
//! - [`config`]: figment-based configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod tree;
pub mod types;
pub mod workspace;

// Configuration
pub use config::{Config, ConfigLoader, ExamplesConfig, ReflectorConfig};

// Error Types
pub use types::error::{DocgenError, Result};

// Core types
pub use types::{
    AnchorIdMap, CodeExample, DocumentationJson, ProjectDescriptor, ProjectType,
    ReflectionDocument, ReflectionNode,
};

// Pipeline
pub use pipeline::{EntryPointSet, GenerationSummary, Reflector, TypedocReflector, generate};

// Staged tree
pub use tree::StagedTree;
pub use workspace::Workspace;
