//! CLI Command Implementations

pub mod commands;
