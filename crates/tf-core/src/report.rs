//! The flag union report: both flags, then their bitwise OR.

use crate::error::Result;
use crate::flags::{LocalFlags, ECHO, ICANON};
use crate::format::format_unsigned;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Template used for the plain decimal report.
pub const DEFAULT_TEMPLATE: &str = "%llu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStyle {
    /// One line per value, formatted with a printf-style template.
    Template(String),
    /// A single JSON object on one line.
    Json,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::Template(DEFAULT_TEMPLATE.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagReport {
    pub icanon: LocalFlags,
    pub echo: LocalFlags,
    pub flag: LocalFlags,
}

impl FlagReport {
    pub fn compute() -> Self {
        let mut flag = LocalFlags::EMPTY;
        flag |= ICANON | ECHO;
        Self {
            icanon: ICANON,
            echo: ECHO,
            flag,
        }
    }

    /// Values in print order.
    pub fn values(&self) -> [u64; 3] {
        [self.icanon.bits(), self.echo.bits(), self.flag.bits()]
    }

    /// Render every line into a string first so a bad template writes nothing.
    pub fn render_to_string(&self, style: &RenderStyle) -> Result<String> {
        let mut out = String::new();
        match style {
            RenderStyle::Template(template) => {
                for value in self.values() {
                    out.push_str(&format_unsigned(template, value)?);
                    out.push('\n');
                }
            }
            RenderStyle::Json => {
                out.push_str(&serde_json::to_string(self)?);
                out.push('\n');
            }
        }
        Ok(out)
    }

    pub fn render<W: Write>(&self, style: &RenderStyle, writer: &mut W) -> Result<()> {
        let text = self.render_to_string(style)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
