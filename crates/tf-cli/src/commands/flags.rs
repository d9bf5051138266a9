//! Flag listing command implementation

use crate::{cli::CliConfig, Result};
use clap::Args;
use console::{style, Term};
use std::io::{self, Write};
use tf_core::flags::KNOWN_FLAGS;

/// Arguments for the flags command
#[derive(Args, Debug, Clone, Default)]
pub struct FlagsArgs {
    /// Print a header line
    #[arg(long)]
    pub header: bool,
}

/// Execute the flags command
pub fn flags_command(args: FlagsArgs, _config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.header {
        let header = "NAME\tDEC\tHEX";
        if Term::stdout().is_term() {
            writeln!(out, "{}", style(header).bold())?;
        } else {
            writeln!(out, "{}", header)?;
        }
    }
    write_flags(&mut out)?;
    out.flush()?;
    Ok(())
}

/// One line per known flag: name, decimal value, hex value.
pub fn write_flags<W: Write>(out: &mut W) -> io::Result<()> {
    for (name, flag) in KNOWN_FLAGS {
        writeln!(out, "{}\t{}\t{:#x}", name, flag.bits(), flag.bits())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_flags() {
        let mut out = Vec::new();
        write_flags(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ICANON\t256\t0x100\nECHO\t8\t0x8\n"
        );
    }
}
