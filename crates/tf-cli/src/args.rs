//! Command-line arguments for `tflag`

use crate::cli::{LogFormat, LogLevel};
use crate::commands::{completions::CompletionsArgs, flags::FlagsArgs, report::ReportArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tflag",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print the ICANON and ECHO terminal flags and their bitwise union",
    long_about = r#"
Prints the ICANON and ECHO local-mode flags and the value obtained by OR-ing
them together, one per line, in unsigned decimal.

EXAMPLES:
    tflag                          # 256, 8, 264
    tflag report --format hex      # 0x100, 0x8, 0x108
    tflag flags                    # list known flags
    "#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    pub log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print both flags and their union (the default)
    Report(ReportArgs),

    /// List the known flags with their values
    Flags(FlagsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Cli {
    /// The command to run; a bare `tflag` is a report with default arguments.
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Report(ReportArgs::default()))
    }
}
