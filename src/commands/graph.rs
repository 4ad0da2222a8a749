//! Graph command CLI wrapper

use crate::cli::GraphArgs;
use crate::error::Result;
use crate::render;
use crate::state::ModState;

/// Run graph command: render the dependency tree to stdout
pub fn run(args: GraphArgs) -> Result<()> {
    let state = ModState::load(&args.mods_dir)?;
    if state.store.is_empty() {
        println!("No bundles tracked.");
        return Ok(());
    }
    for line in render::render(&state) {
        println!("{line}");
    }
    println!();
    println!(
        "{} installed, {} uninstalled",
        state.store.installed().count(),
        state.store.uninstalled().count()
    );
    Ok(())
}
