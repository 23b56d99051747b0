//! # Cipher Arena Kernel
//!
//! Deterministic game-and-economy kernel for Cipher Arena: code-breaking
//! evaluation, seeded secret and environment generation, and tournament
//! prize and balance-locking arithmetic.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CIPHER ARENA KERNEL                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Mulberry32 PRNG + string seeds            │
//! │  ├── money.rs    - Integer minor-unit amounts                │
//! │  └── hash.rs     - Audit digests                             │
//! │                                                              │
//! │  game/           - Code-breaking rules                       │
//! │  ├── symbol.rs   - Fixed symbol alphabet                     │
//! │  ├── code.rs     - Validated codes                           │
//! │  ├── evaluate.rs - Exact/present scoring                     │
//! │  ├── secret.rs   - Random and seeded secrets                 │
//! │  ├── round.rs    - Attempt tracking                          │
//! │  └── bot.rs      - Seeded bot opponents                      │
//! │                                                              │
//! │  cosmetic/       - Presentation only (never gameplay)        │
//! │  ├── environment.rs - Seeded environmental config            │
//! │  └── flags.rs    - Caller-supplied presentation flags        │
//! │                                                              │
//! │  economy/        - Integer currency arithmetic               │
//! │  ├── tier.rs     - Locked vs available balance               │
//! │  ├── payout.rs   - Per-mille payout tables                   │
//! │  ├── arena.rs    - Pool, prizes, settlement                  │
//! │  └── standings.rs- Field ranking                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Every operation except random-mode secret generation is a pure function
//! of its inputs:
//! - No shared mutable state; safe to call from any number of threads
//! - No binary floats in currency math
//! - All seeded randomness from Mulberry32
//!
//! Given identical inputs, two independent processes produce
//! **identical results** without communicating.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

use chrono::{DateTime, Utc};

pub mod config;
pub mod core;
pub mod cosmetic;
pub mod economy;
pub mod game;

// Re-export commonly used types
pub use crate::core::money::Amount;
pub use crate::core::rng::{string_to_seed, SeededRng};
pub use cosmetic::environment::EnvironmentalConfig;
pub use economy::arena::{calculate_arena_pool, scaled_arena_prize, settle, Settlement};
pub use economy::payout::{itm_count, PayoutTable};
pub use economy::tier::{calculate_balance_breakdown, BalanceBreakdown};
pub use game::code::{Code, CODE_LENGTH};
pub use game::evaluate::{evaluate, EvaluationResult};
pub use game::secret::{generate_secret, generate_seeded_secret};
pub use game::symbol::{Symbol, ALPHABET};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the environmental config for a round.
///
/// `generated_at` is supplied by the caller so the result is a pure function
/// of its arguments.
pub fn generate_environmental_config(
    round_id: &str,
    symbol_count: usize,
    generated_at: DateTime<Utc>,
) -> EnvironmentalConfig {
    EnvironmentalConfig::generate(round_id, symbol_count, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_environmental_config_repeatable() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let a = generate_environmental_config("round-42", 6, at);
        let b = generate_environmental_config("round-42", 6, at);
        assert_eq!(a, b);
        assert_eq!(a.generated_at(), at);
    }
}
