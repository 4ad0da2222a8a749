//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - remove: Remove command arguments
//! - graph: Graph command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod graph;
pub mod install;
pub mod remove;

pub use completions::CompletionsArgs;
pub use graph::GraphArgs;
pub use install::InstallArgs;
pub use remove::RemoveArgs;

/// modkeep - dependency-aware game mod manager
#[derive(Parser, Debug)]
#[command(
    name = "modkeep",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dependency-aware manager for zipped game-mod bundles",
    long_about = "modkeep tracks zipped mod bundles for a game directory, records which \
                  bundle requires which, refuses removals that would break an installed \
                  bundle, and cascades removal into dependencies nothing needs anymore.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modkeep install ./game ./mods            \x1b[90m# Pick a bundle interactively\x1b[0m\n   \
                  modkeep install ./game ./mods hd.zip     \x1b[90m# Install a specific archive\x1b[0m\n   \
                  modkeep remove ./game ./mods hd.zip -y   \x1b[90m# Remove without confirmation\x1b[0m\n   \
                  modkeep graph ./game ./mods              \x1b[90m# Show the dependency tree\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a bundle archive into the game directory
    Install(InstallArgs),

    /// Remove an installed bundle (and its orphaned dependencies)
    Remove(RemoveArgs),

    /// Show the dependency graph of tracked bundles
    Graph(GraphArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
