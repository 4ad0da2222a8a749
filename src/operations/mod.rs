//! Install and removal workflows
//!
//! Workflows mutate an explicit [`crate::state::ModState`] value and talk to
//! collaborators through traits; the command layer persists the state once
//! after a workflow finishes. An error leaves the persisted file untouched.

pub mod install;
pub mod remove;
