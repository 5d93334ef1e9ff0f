//! Configuration Management
//!
//! Hierarchical resolution:
//! 1. Built-in defaults
//! 2. Workspace config (`ngdocgen.toml` at the workspace root)
//! 3. Environment variables (NGDOCGEN_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
