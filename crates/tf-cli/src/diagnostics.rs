//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::{Diagnostic, SourceSpan};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

#[derive(Error, Debug, Clone, Diagnostic)]
pub enum TermflagError {
    #[error("Invalid configuration file {path}: {message}")]
    #[diagnostic(
        code(termflag::config_error),
        help("Supported keys are output.format, output.template, logging.level and logging.format")
    )]
    ConfigError {
        path: String,
        message: String,
        #[source_code]
        config_src: String,
        #[label("here")]
        err_span: Option<SourceSpan>,
    },

    #[error("Invalid output template: {message}")]
    #[diagnostic(
        code(termflag::template_error),
        help("Use exactly one of %u, %d, %x, %X or %o, optionally with l/ll, a width and the -, 0 or # flags")
    )]
    TemplateError { message: String },
}

/// Helper function to create a configuration syntax error with source context
pub fn config_syntax_error(
    path: &Path,
    src: String,
    message: String,
    span: Option<Range<usize>>,
) -> TermflagError {
    TermflagError::ConfigError {
        path: path.display().to_string(),
        message,
        config_src: src,
        err_span: span.map(SourceSpan::from),
    }
}

/// Rich diagnostic for errors that have one.
pub fn diagnostic_for(error: &CliError) -> Option<TermflagError> {
    match error {
        CliError::Diagnostic(diagnostic) => Some(diagnostic.as_ref().clone()),
        CliError::Core(tf_core::Error::Format(message)) => Some(TermflagError::TemplateError {
            message: message.clone(),
        }),
        _ => None,
    }
}

/// Render `error` through miette on stderr. Returns false when the error has
/// no diagnostic form and should be logged instead.
pub fn render_cli_error(error: &CliError) -> bool {
    match diagnostic_for(error) {
        Some(diagnostic) => {
            eprintln!("{:?}", miette::Report::new(diagnostic));
            true
        }
        None => false,
    }
}
