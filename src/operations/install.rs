//! Install workflow
//!
//! Select bundle -> select dependencies -> place files -> commit. Any
//! failure aborts the whole install before the command layer persists, so
//! there is never a placed bundle the state file does not know about, or a
//! recorded bundle whose files never landed.

use crate::deploy::{Deploy, PlacementReport};
use crate::error::{ModkeepError, Result};
use crate::intake::Intake;
use crate::select::Select;
use crate::state::ModState;

/// What a completed install did, for the command layer to report
#[derive(Debug)]
pub struct InstallOutcome {
    pub name: String,
    pub dependencies: Vec<String>,
    pub report: PlacementReport,
}

/// Run the install workflow. `Ok(None)` means the user cancelled.
pub fn run(
    state: &mut ModState,
    intake: &Intake,
    select: &dyn Select,
    deploy: &dyn Deploy,
) -> Result<Option<InstallOutcome>> {
    // SelectBundle
    let candidates: Vec<String> = intake
        .available()?
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    if candidates.is_empty() {
        return Err(ModkeepError::NoCandidates);
    }
    let Some(name) = select.pick_install_target(&candidates)? else {
        return Ok(None);
    };
    if state.store.is_installed(&name) {
        return Err(ModkeepError::DuplicateBundle { name });
    }

    // SelectDependencies: choices come from what is currently installed
    let installed: Vec<String> = state.store.installed().map(str::to_string).collect();
    let Some(dependencies) = select.pick_dependencies(&name, &installed)? else {
        return Ok(None);
    };

    // The new bundle enters the store uninstalled so the graph can hold
    // edges for it; a graph error aborts before any file moves.
    state.store.register(&name)?;
    for dependency in &dependencies {
        state.graph.add_dependency(&state.store, &name, dependency)?;
    }

    // PlaceFiles
    let report = deploy.place(&name)?;

    // Commit
    state.store.mark_installed(&name)?;

    Ok(Some(InstallOutcome {
        name,
        dependencies,
        report,
    }))
}
