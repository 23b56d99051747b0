//! Game Logic Module
//!
//! Code-breaking rules. 100% deterministic apart from random-mode secrets.
//!
//! ## Module Structure
//!
//! - `symbol`: The fixed symbol alphabet
//! - `code`: Validated codes and input errors
//! - `evaluate`: Exact/present scoring of a guess
//! - `secret`: Random and seeded secret generation
//! - `round`: Attempt tracking for one secret
//! - `bot`: Seeded solver used for bot opponents

pub mod symbol;
pub mod code;
pub mod evaluate;
pub mod secret;
pub mod round;
pub mod bot;

// Re-export key types
pub use symbol::{Symbol, ALPHABET, SYMBOL_COUNT};
pub use code::{Code, CodeError, CODE_LENGTH};
pub use evaluate::{evaluate, evaluate_ids, EvaluationResult};
pub use secret::{generate_secret, generate_seeded_secret};
pub use round::{Round, RoundError, RoundOutcome};
pub use bot::Bot;
