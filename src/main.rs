//! modkeep - dependency-aware game mod manager
//!
//! Tracks zipped mod bundles for a game directory: which are installed,
//! which bundle requires which, and whether a removal would break something
//! that is still installed. Orphaned dependencies are removed along with
//! their last dependant.

use clap::Parser;

mod cli;
mod commands;
mod deploy;
mod error;
mod graph;
mod intake;
mod operations;
mod progress;
mod render;
mod select;
mod state;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Remove(args) => commands::remove::run(args),
        Commands::Graph(args) => commands::graph::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
