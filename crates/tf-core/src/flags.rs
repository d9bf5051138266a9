//! Terminal local-mode flag word.
//!
//! Only the bit values are modelled here. Nothing in this crate touches a
//! real terminal.

use derive_more::{BitOr, BitOrAssign, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Canonical (line-buffered) input mode.
pub const ICANON: LocalFlags = LocalFlags(0x0000_0100);
/// Echo input characters.
pub const ECHO: LocalFlags = LocalFlags(0x0000_0008);

/// Known flags in listing order.
pub const KNOWN_FLAGS: &[(&str, LocalFlags)] = &[("ICANON", ICANON), ("ECHO", ECHO)];

/// A 64-bit local-mode flag word. Composed with `|` and `|=`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    BitOr,
    BitOrAssign,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct LocalFlags(u64);

impl LocalFlags {
    pub const EMPTY: LocalFlags = LocalFlags(0);

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: LocalFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn names(self) -> Vec<&'static str> {
        KNOWN_FLAGS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}
