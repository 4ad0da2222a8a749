use clap::Parser;
use std::path::PathBuf;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick a bundle interactively:\n    modkeep remove ./game ./mods\n\n\
                  Remove a specific bundle:\n    modkeep remove ./game ./mods hd-pack.zip\n\n\
                  Remove without confirmation:\n    modkeep remove ./game ./mods hd-pack.zip -y")]
pub struct RemoveArgs {
    /// Game files directory the bundle contents were copied into
    pub game_dir: PathBuf,

    /// Mods directory holding bundle archives and the state file
    pub mods_dir: PathBuf,

    /// Installed bundle to remove (if omitted, shows an interactive menu)
    pub name: Option<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
