//! Error types and handling for modkeep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`store`]: Bundle store errors
//! - [`graph`]: Dependency graph errors
//! - [`deploy`]: File placement/removal errors

#![allow(dead_code)]

pub mod deploy;
pub mod graph;
pub mod store;

pub use deploy::{placement_failed, removal_failed};
pub use graph::{cyclic_dependency, has_dependants, self_dependency};
pub use store::{duplicate_bundle, unknown_bundle};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modkeep operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModkeepError {
    // Store errors
    #[error("Bundle '{name}' is already installed")]
    #[diagnostic(
        code(modkeep::store::duplicate),
        help("Remove the installed bundle first, or pick a different archive name")
    )]
    DuplicateBundle { name: String },

    #[error("Unknown bundle: '{name}'")]
    #[diagnostic(
        code(modkeep::store::unknown),
        help("Check the bundle name against 'modkeep graph' output")
    )]
    UnknownBundle { name: String },

    // Graph errors
    #[error("Bundle '{name}' cannot depend on itself")]
    #[diagnostic(code(modkeep::graph::self_dependency))]
    SelfDependency { name: String },

    #[error("Adding '{dependant}' -> '{dependency}' would create a dependency cycle")]
    #[diagnostic(
        code(modkeep::graph::cycle),
        help("'{dependency}' already requires '{dependant}', directly or transitively")
    )]
    CyclicDependency {
        dependant: String,
        dependency: String,
    },

    #[error("Bundle '{name}' is still required by: {}", .dependants.join(", "))]
    #[diagnostic(
        code(modkeep::graph::has_dependants),
        help("Remove the listed bundles first")
    )]
    HasDependants {
        name: String,
        dependants: Vec<String>,
    },

    // Intake errors
    #[error("No bundle archives available to install")]
    #[diagnostic(
        code(modkeep::intake::no_candidates),
        help("Place .zip archives in the mods directory or its _uninstalled_ folder")
    )]
    NoCandidates,

    // File placement/removal errors
    #[error("Failed to place files for '{name}': {reason}")]
    #[diagnostic(code(modkeep::deploy::placement_failed))]
    Placement { name: String, reason: String },

    #[error("Failed to remove files for '{name}': {reason}")]
    #[diagnostic(code(modkeep::deploy::removal_failed))]
    Removal { name: String, reason: String },

    // State file errors
    #[error("Failed to parse state file {path}: {reason}")]
    #[diagnostic(
        code(modkeep::state::parse_failed),
        help("Fix or delete the file; a missing state file starts empty")
    )]
    StateParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modkeep::fs::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for ModkeepError {
    fn from(err: std::io::Error) -> Self {
        ModkeepError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModkeepError {
    fn from(err: serde_json::Error) -> Self {
        ModkeepError::StateParseFailed {
            path: "dependencies.json".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ModkeepError {
    fn from(err: inquire::InquireError) -> Self {
        ModkeepError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModkeepError>;
