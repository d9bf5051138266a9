//! Report command implementation

use crate::cli::{CliConfig, OutputFormat};
use crate::Result;
use clap::Args;
use std::io::{self, Write};
use tf_core::FlagReport;
use tracing::{debug, info_span};

/// Arguments for the report command
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// printf-style template for each value, e.g. "%#llx"
    #[arg(long)]
    pub template: Option<String>,
}

/// Execute the report command
pub fn report_command(args: ReportArgs, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&args, config, &mut out)
}

/// Render the report for `args` layered over `config` into `out`.
pub fn write_report<W: Write>(args: &ReportArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let _span = info_span!("report").entered();

    let mut output = config.output.clone();
    if let Some(format) = args.format {
        output.format = format;
    }
    if let Some(template) = &args.template {
        output.template = Some(template.clone());
    }
    let style = output.render_style();

    let report = FlagReport::compute();
    debug!(
        icanon = report.icanon.bits(),
        echo = report.echo.bits(),
        flag = report.flag.bits(),
        ?style,
        "computed flag union"
    );

    report.render(&style, out)?;
    Ok(())
}
