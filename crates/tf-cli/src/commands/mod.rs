//! Command implementations for the termflag CLI

pub mod completions;
pub mod flags;
pub mod report;

pub use completions::completions_command;
pub use flags::flags_command;
pub use report::report_command;

use crate::args::Commands;
use crate::{cli::CliConfig, Result};

/// Dispatch a parsed command.
pub fn run_command(command: Commands, config: &CliConfig) -> Result<()> {
    match command {
        Commands::Report(args) => report_command(args, config),
        Commands::Flags(args) => flags_command(args, config),
        Commands::Completions(args) => completions_command(args, config),
    }
}
