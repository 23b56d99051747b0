//! Codes
//!
//! A code is an ordered, duplicate-free sequence of exactly [`CODE_LENGTH`]
//! symbols. The same type carries secrets and validated guesses.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symbol::Symbol;

/// Symbols per code.
pub const CODE_LENGTH: usize = 4;

/// Invalid code or guess input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Sequence does not have the fixed code length.
    #[error("expected {expected} symbols, got {got}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },
    /// Identifier is not part of the alphabet.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    /// A symbol appears more than once.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(Symbol),
}

/// A validated code.
///
/// Construction is the only place the invariants are checked; there are no
/// mutators afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Code([Symbol; CODE_LENGTH]);

impl Code {
    /// Build a code from an array, rejecting repeats.
    pub fn new(symbols: [Symbol; CODE_LENGTH]) -> Result<Self, CodeError> {
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(CodeError::DuplicateSymbol(*symbol));
            }
        }
        Ok(Self(symbols))
    }

    /// Build a code from a slice, checking length and repeats.
    pub fn from_slice(symbols: &[Symbol]) -> Result<Self, CodeError> {
        let array: [Symbol; CODE_LENGTH] =
            symbols.try_into().map_err(|_| CodeError::LengthMismatch {
                expected: CODE_LENGTH,
                got: symbols.len(),
            })?;
        Self::new(array)
    }

    /// Parse a code from symbol identifiers.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, CodeError> {
        let symbols = parse_ids(ids)?;
        Self::from_slice(&symbols)
    }

    /// Symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }

    /// Symbol identifiers in order.
    pub fn ids(&self) -> [&'static str; CODE_LENGTH] {
        self.0.map(Symbol::id)
    }
}

/// Parse symbol identifiers without any length or repeat checks.
pub fn parse_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Symbol>, CodeError> {
    ids.iter().map(|id| id.as_ref().parse()).collect()
}

impl AsRef<[Symbol]> for Code {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl TryFrom<Vec<Symbol>> for Code {
    type Error = CodeError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::from_slice(&symbols)
    }
}

impl From<Code> for Vec<Symbol> {
    fn from(code: Code) -> Self {
        code.0.to_vec()
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.ids().join(","))
    }
}
