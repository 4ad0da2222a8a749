//! Remove command CLI wrapper

use console::Style;

use crate::cli::RemoveArgs;
use crate::deploy::ArchiveDeployer;
use crate::error::Result;
use crate::intake::Intake;
use crate::operations;
use crate::select::{InquireSelect, PresetSelect, Select, confirm_removal};
use crate::state::ModState;

/// Run remove command
pub fn run(args: RemoveArgs) -> Result<()> {
    let intake = Intake::new(&args.mods_dir)?;
    let mut state = ModState::load(&args.mods_dir)?;
    let deploy = ArchiveDeployer::new(args.game_dir.clone(), intake.clone());

    let select: Box<dyn Select> = match args.name {
        Some(name) => Box::new(PresetSelect {
            target: name,
            dependencies: Vec::new(),
        }),
        None => Box::new(InquireSelect),
    };

    let Some(target) = operations::remove::resolve_target(&state, select.as_ref())? else {
        println!("Nothing to remove.");
        return Ok(());
    };

    // Surface blocking dependants before bothering the user with a prompt
    operations::remove::ensure_removable(&state, &target)?;

    if !confirm_removal(&target, args.yes)? {
        println!("Remove cancelled.");
        return Ok(());
    }

    let outcome = operations::remove::run(&mut state, &target, &deploy)?;
    state.save(&args.mods_dir)?;

    let bold = Style::new().bold();
    for (name, report) in &outcome.removed {
        let label = if name == &target {
            "Removed"
        } else {
            "Removed (orphaned dependency)"
        };
        println!(
            "{} {}",
            Style::new().green().apply_to(label),
            bold.apply_to(name)
        );
        println!(
            "  Files: {} removed, {} already missing",
            report.removed, report.missing
        );
    }

    Ok(())
}
