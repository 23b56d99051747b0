//! Symbol Alphabet
//!
//! The fixed, closed set of symbols a code is built from. Consumers must use
//! this table rather than inventing their own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::code::CodeError;

/// Number of symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 6;

/// A code symbol.
///
/// The discriminant is the symbol's index into [`ALPHABET`], which is also
/// the index the seeded shuffles operate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Symbol {
    /// Circle (red)
    Circle = 0,
    /// Square (blue)
    Square = 1,
    /// Triangle (green)
    Triangle = 2,
    /// Diamond (yellow)
    Diamond = 3,
    /// Star (purple)
    Star = 4,
    /// Hexagon (orange)
    Hexagon = 5,
}

/// Every symbol, in index order.
pub const ALPHABET: [Symbol; SYMBOL_COUNT] = [
    Symbol::Circle,
    Symbol::Square,
    Symbol::Triangle,
    Symbol::Diamond,
    Symbol::Star,
    Symbol::Hexagon,
];

impl Symbol {
    /// Stable string identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Symbol::Circle => "circle",
            Symbol::Square => "square",
            Symbol::Triangle => "triangle",
            Symbol::Diamond => "diamond",
            Symbol::Star => "star",
            Symbol::Hexagon => "hexagon",
        }
    }

    /// Display colour as a CSS hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Symbol::Circle => "#ef4444",
            Symbol::Square => "#3b82f6",
            Symbol::Triangle => "#22c55e",
            Symbol::Diamond => "#eab308",
            Symbol::Star => "#a855f7",
            Symbol::Hexagon => "#f97316",
        }
    }

    /// Index into [`ALPHABET`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol at an alphabet index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        ALPHABET.get(index).copied()
    }

    /// Look up a symbol by identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        ALPHABET.iter().copied().find(|s| s.id() == id)
    }
}

impl FromStr for Symbol {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_id(s).ok_or_else(|| CodeError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
