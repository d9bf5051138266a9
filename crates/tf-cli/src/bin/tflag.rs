//! termflag CLI binary
//!
//! # Usage
//!
//! ```bash
//! # Print ICANON, ECHO and their union in decimal
//! tflag
//!
//! # Same report in hex, or as JSON
//! tflag report --format hex
//! tflag report --format json
//!
//! # Custom printf-style template
//! tflag report --template "%08llx"
//! ```

use clap::Parser;
use tf_cli::{
    args::Cli,
    cli::{CliConfig, LoggingConfig},
    commands,
    diagnostics::{render_cli_error, setup_error_reporting},
    logging::setup_logging,
};
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_error_reporting() {
        eprintln!("{}", e);
    }

    let config = CliConfig::load(cli.config.as_deref());
    let logging = match &config {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    if let Err(e) = setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format, &logging) {
        eprintln!("{}", e);
    }

    let command = cli.command_or_default();
    let result = config.and_then(|config| commands::run_command(command, &config));

    match result {
        Ok(()) => debug!("Command completed successfully"),
        Err(e) => {
            if !render_cli_error(&e) {
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}
