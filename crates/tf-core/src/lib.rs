//! Core types for termflag: the local-mode flag word, the flag union report
//! and the printf-style formatter used to render it.

pub mod error;
pub mod flags;
pub mod format;
pub mod report;

pub use error::{Error, Result};
pub use flags::{LocalFlags, ECHO, ICANON};
pub use format::format_unsigned;
pub use report::{FlagReport, RenderStyle, DEFAULT_TEMPLATE};
