//! Removal workflow with cascade
//!
//! A bundle can only be removed while no installed bundle still requires
//! it. After the target is gone, each of its direct dependencies that is
//! now referenced by nothing and still installed is removed the same way,
//! recursively. The cascade runs in the dependant's recorded dependency
//! order and fails fast: the first error aborts the invocation, the command
//! layer persists nothing, and the state file stays as it was loaded.

use crate::deploy::{Deploy, RemovalReport};
use crate::error::{Result, has_dependants, unknown_bundle};
use crate::select::Select;
use crate::state::ModState;
use crate::store::Status;

/// Bundles removed by one invocation, target first, cascade order after
#[derive(Debug, Default)]
pub struct RemoveOutcome {
    pub removed: Vec<(String, RemovalReport)>,
}

/// Pick the removal target from the installed set. `Ok(None)` = cancelled.
///
/// The empty-set case is the selector's call: an explicit target must fail
/// with `UnknownBundle` so scripted exit codes stay consistent, while the
/// interactive picker just declines.
pub fn resolve_target(state: &ModState, select: &dyn Select) -> Result<Option<String>> {
    let installed: Vec<String> = state.store.installed().map(str::to_string).collect();
    select.pick_removal_target(&installed)
}

/// Fail with `HasDependants` unless no installed bundle still requires `name`
pub fn ensure_removable(state: &ModState, name: &str) -> Result<()> {
    if state.store.status(name) != Some(Status::Installed) {
        return Err(unknown_bundle(name));
    }
    let blocking: Vec<String> = state
        .graph
        .dependants_of(name)
        .into_iter()
        .filter(|d| state.store.is_installed(d))
        .collect();
    if !blocking.is_empty() {
        return Err(has_dependants(name, &blocking));
    }
    Ok(())
}

/// Run the removal workflow for `target`, cascading into orphaned deps
pub fn run(state: &mut ModState, target: &str, deploy: &dyn Deploy) -> Result<RemoveOutcome> {
    ensure_removable(state, target)?;
    let mut outcome = RemoveOutcome::default();
    remove_one(state, target, deploy, &mut outcome)?;
    Ok(outcome)
}

fn remove_one(
    state: &mut ModState,
    name: &str,
    deploy: &dyn Deploy,
    outcome: &mut RemoveOutcome,
) -> Result<()> {
    // Capture before mutation; the cascade needs the pre-removal edge set
    let dependencies = state.graph.dependencies_of(name).to_vec();

    let report = deploy.remove_files(name)?;
    state.store.remove(name)?;
    state.graph.remove_bundle_edges(name);
    outcome.removed.push((name.to_string(), report));

    for dependency in dependencies {
        let orphaned = !state.graph.is_used_by_others(&dependency, None);
        if orphaned && state.store.status(&dependency) == Some(Status::Installed) {
            remove_one(state, &dependency, deploy, outcome)?;
        }
    }
    Ok(())
}
