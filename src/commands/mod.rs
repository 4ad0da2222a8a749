//! Thin CLI command wrappers
//!
//! Each command loads the state file, wires up collaborators, delegates to
//! the matching operation, and persists the state once on success.

pub mod completions;
pub mod graph;
pub mod install;
pub mod remove;
pub mod version;
