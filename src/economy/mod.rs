//! Economy Module
//!
//! Tier balance locking and arena prize arithmetic. All amounts are integer
//! minor units; no floats.
//!
//! ## Module Structure
//!
//! - `tier`: Locked vs available balance per tier
//! - `payout`: Per-mille payout tables by field size
//! - `arena`: Pool derivation, prizes and settlement
//! - `standings`: Ranking a finished field

pub mod tier;
pub mod payout;
pub mod arena;
pub mod standings;

// Re-export key types
pub use tier::{calculate_balance_breakdown, BalanceBreakdown, BalanceError, Tier, TierEconomyConfig};
pub use payout::{itm_count, PayoutTable, CANONICAL_PAYOUT_PERMIL};
pub use arena::{
    calculate_arena_pool, scaled_arena_prize, settle, ArenaError, ArenaPool, Payout, Settlement,
};
pub use standings::{rank_field, FieldEntry, Standing};
