//! Install command CLI wrapper

use console::Style;

use crate::cli::InstallArgs;
use crate::deploy::ArchiveDeployer;
use crate::error::Result;
use crate::intake::Intake;
use crate::operations;
use crate::select::{InquireSelect, PresetSelect, Select};
use crate::state::ModState;

/// Run install command
pub fn run(args: InstallArgs) -> Result<()> {
    let intake = Intake::new(&args.mods_dir)?;
    let mut state = ModState::load(&args.mods_dir)?;
    let deploy = ArchiveDeployer::new(args.game_dir.clone(), intake.clone());
    // No progress bar when output is piped
    let deploy = if console::user_attended() {
        deploy
    } else {
        deploy.quiet()
    };

    let select: Box<dyn Select> = match args.name {
        Some(name) => Box::new(PresetSelect {
            target: name,
            dependencies: args.deps,
        }),
        None => Box::new(InquireSelect),
    };

    let Some(outcome) = operations::install::run(&mut state, &intake, select.as_ref(), &deploy)?
    else {
        println!("Install cancelled.");
        return Ok(());
    };

    // The commit point: files are placed and the graph is updated, persist
    // both as one unit.
    state.save(&args.mods_dir)?;

    let bold = Style::new().bold();
    println!(
        "{} {}",
        Style::new().green().apply_to("Installed"),
        bold.apply_to(&outcome.name)
    );
    if outcome.dependencies.is_empty() {
        println!("  Dependencies: none");
    } else {
        println!("  Dependencies: {}", outcome.dependencies.join(", "));
    }
    println!(
        "  Files: {} copied, {} overwritten",
        outcome.report.copied, outcome.report.overwritten
    );

    Ok(())
}
