//! termflag CLI library
//!
//! Argument parsing, configuration, logging setup and the command
//! implementations behind the `tflag` binary.

pub mod args;
pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod logging;

pub use tf_core::{FlagReport, LocalFlags, RenderStyle};

// CLI-specific error handling
pub mod error {
    use crate::diagnostics::TermflagError;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error(transparent)]
        Diagnostic(#[from] Box<TermflagError>),

        #[error("{0}")]
        Core(#[from] tf_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
