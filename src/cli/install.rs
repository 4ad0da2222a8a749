use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick a bundle interactively:\n    modkeep install ./game ./mods\n\n\
                  Install a specific archive:\n    modkeep install ./game ./mods hd-pack.zip\n\n\
                  Install with dependencies, no prompts:\n    modkeep install ./game ./mods hd-pack.zip --deps core.zip,ui.zip")]
pub struct InstallArgs {
    /// Game files directory the bundle contents are copied into
    pub game_dir: PathBuf,

    /// Mods directory holding bundle archives and the state file
    pub mods_dir: PathBuf,

    /// Archive to install (if omitted, shows an interactive menu)
    pub name: Option<String>,

    /// Dependencies to record, drawn from installed bundles
    #[arg(long, value_delimiter = ',', requires = "name")]
    pub deps: Vec<String>,
}
