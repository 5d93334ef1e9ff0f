//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (DocgenError) for the entire application
//! - Structured variants with context for better diagnostics
//! - User-facing messages are part of the contract: the library-type check and
//!   the reflector failure carry fixed wording the CLI prints verbatim
//! - No panic/unwrap - all failures propagate as errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocgenError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The selected project does not declare the `library` project type.
    /// The message wording is part of the CLI contract.
    #[error("Only library projects can generate documentation.")]
    NotALibrary,

    /// The reflector ran but produced no project. The most common root cause
    /// is source that does not compile, so the message points there first.
    #[error(
        "TypeDoc did not produce a project for '{project}'. \
         Verify that the library's source compiles (e.g. run a normal build \
         of '{project}') and try again."
    )]
    AnalysisFailed { project: String },

    /// A required input file is absent from the staged tree and the disk.
    #[error("File not found in tree: {path}")]
    MissingFile { path: String },

    /// Creating a path that already exists in the staged tree.
    #[error("Path already exists in tree: {path}")]
    PathExists { path: String },

    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Reflector error: {0}")]
    Reflector(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;
