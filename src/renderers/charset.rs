//! Character palettes for filled and empty grid cells.

use std::str::FromStr;

/// Which characters to paint the grid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// `*` on spaces.
    #[default]
    Ascii,
    /// Full block on spaces.
    Unicode,
}

impl CharSet {
    pub fn filled(self) -> char {
        match self {
            CharSet::Ascii => '*',
            CharSet::Unicode => '█',
        }
    }

    pub fn empty(self) -> char {
        ' '
    }
}

impl FromStr for CharSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(CharSet::Ascii),
            "unicode" => Ok(CharSet::Unicode),
            other => Err(format!("Unknown charset '{other}'; use ascii or unicode")),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
