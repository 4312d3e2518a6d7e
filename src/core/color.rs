//! The four-button color alphabet.
//!
//! Colors are the only symbols a sequence can contain. Their order in
//! [`Color::ALL`] is fixed and is what random draws index into.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four game buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
    Purple,
    Green,
}

impl Color {
    /// Every color, in draw order.
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Red, Color::Purple, Color::Green];

    /// Number of symbols in the alphabet.
    pub const COUNT: usize = Self::ALL.len();

    /// Look up a color by its position in [`Color::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this color in [`Color::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Red => 1,
            Color::Purple => 2,
            Color::Green => 3,
        }
    }

    /// Lowercase button name (also the button's element id in the browser game).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
