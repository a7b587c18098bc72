//! Command implementations for trade atlas CLI
//!
//! This module contains the main command execution logic for the CLI
//! interface. Each command is implemented in its own module.

pub mod describe;
pub mod explore;
pub mod options;
pub mod resolve;
pub mod shared;
pub mod view;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner for trade atlas
///
/// Dispatches to the subcommand handler:
/// - `view`: one selection from flags, with optional exports
/// - `explore`: interactive selections on the memoized dataset
/// - `options`: distinct values per selection field
/// - `describe`: commodity descriptions
/// - `resolve`: country name resolution
pub fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::View(args) => view::run_view(args),
        Commands::Explore(args) => explore::run_explore(args),
        Commands::Options(args) => options::run_options(args),
        Commands::Describe(args) => describe::run_describe(args),
        Commands::Resolve(args) => resolve::run_resolve(args),
    }
}
