use clap::Parser;
use std::path::PathBuf;

/// Arguments for the graph command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the dependency tree:\n    modkeep graph ./game ./mods")]
pub struct GraphArgs {
    /// Game files directory (accepted for a uniform command line; rendering
    /// only reads the mods directory state)
    pub game_dir: PathBuf,

    /// Mods directory holding bundle archives and the state file
    pub mods_dir: PathBuf,
}
