//! Arena Settlement
//!
//! Pool derivation, per-rank prizes and the settlement of a finished field.
//!
//! ```text
//! pool       = total_players * (buy_in - rake_fee)
//! rake_total = total_players * rake_fee
//! prize(r)   = round_half_up(pool * permil[r] / 1000)     (to the cent)
//! ```
//!
//! Per-rank rounding can leave the paid total a few cents under the pool.
//! That residual stays with the house and is reported, not distributed.
//! Rounding can also push the total over the pool for tiny pools; the
//! overage is taken back one cent at a time from the lowest paid rank
//! upwards, so the paid total never exceeds the pool and prizes stay
//! non-increasing by rank.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::hash::{AuditHash, AuditHasher};
use crate::core::money::Amount;

use super::payout::{PayoutTable, PERMIL_TOTAL};
use super::standings::Standing;

/// Invalid arena input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Buy-in must be positive.
    #[error("buy-in must be positive")]
    NonPositiveBuyIn,
    /// Rake must leave a positive contribution to the pool.
    #[error("rake fee {rake_fee} must be below buy-in {buy_in}")]
    RakeNotBelowBuyIn {
        /// Buy-in.
        buy_in: Amount,
        /// Rake fee.
        rake_fee: Amount,
    },
    /// Field has no players.
    #[error("field has no players")]
    EmptyField,
    /// Pool must be positive.
    #[error("prize pool must be positive")]
    NonPositivePool,
    /// Rank is not a finishing position in the field.
    #[error("rank {rank} outside field of {total_players}")]
    RankOutOfBounds {
        /// Requested rank.
        rank: u32,
        /// Field size.
        total_players: u32,
    },
    /// Standings do not cover the field.
    #[error("expected {expected} standings, got {got}")]
    FieldSizeMismatch {
        /// Field size.
        expected: u32,
        /// Standings supplied.
        got: usize,
    },
    /// Same rank listed twice.
    #[error("duplicate rank: {0}")]
    DuplicateRank(u32),
    /// Same player listed twice.
    #[error("duplicate player: {0}")]
    DuplicatePlayer(String),
    /// Amounts too large to represent.
    #[error("amount overflow")]
    Overflow,
}

/// Pool and rake for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaPool {
    /// Entrants, bots included.
    pub total_players: u32,
    /// Buy-in per entrant.
    pub buy_in: Amount,
    /// Rake taken from each buy-in.
    pub rake_fee: Amount,
    /// Prize pool.
    pub pool: Amount,
    /// Total rake collected.
    pub rake_total: Amount,
}

/// Derive pool and rake for a field.
pub fn calculate_arena_pool(
    buy_in: Amount,
    rake_fee: Amount,
    total_players: u32,
) -> Result<ArenaPool, ArenaError> {
    if buy_in.is_zero() {
        return Err(ArenaError::NonPositiveBuyIn);
    }
    if rake_fee >= buy_in {
        return Err(ArenaError::RakeNotBelowBuyIn { buy_in, rake_fee });
    }
    if total_players == 0 {
        return Err(ArenaError::EmptyField);
    }

    let contribution = buy_in - rake_fee;
    let pool = contribution
        .checked_mul(total_players as u64)
        .ok_or(ArenaError::Overflow)?;
    let rake_total = rake_fee
        .checked_mul(total_players as u64)
        .ok_or(ArenaError::Overflow)?;

    Ok(ArenaPool {
        total_players,
        buy_in,
        rake_fee,
        pool,
        rake_total,
    })
}

/// Prize for a finishing rank.
///
/// `total_players` is required: the ITM cutoff depends on it. Ranks inside
/// the field but outside the money pay zero.
pub fn scaled_arena_prize(rank: u32, pool: Amount, total_players: u32) -> Result<Amount, ArenaError> {
    check_rank(rank, total_players)?;
    if pool.is_zero() {
        return Err(ArenaError::NonPositivePool);
    }
    prize_from_table(&PayoutTable::for_field(total_players), rank, pool)
}

fn check_rank(rank: u32, total_players: u32) -> Result<(), ArenaError> {
    if total_players == 0 {
        return Err(ArenaError::EmptyField);
    }
    if rank == 0 || rank > total_players {
        return Err(ArenaError::RankOutOfBounds { rank, total_players });
    }
    Ok(())
}

fn prize_from_table(table: &PayoutTable, rank: u32, pool: Amount) -> Result<Amount, ArenaError> {
    pool.mul_div_round(table.share(rank) as u64, PERMIL_TOTAL as u64)
        .ok_or(ArenaError::Overflow)
}

/// Money paid to one finisher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// Finishing rank.
    pub rank: u32,
    /// Player paid.
    pub player_id: String,
    /// Amount paid.
    pub amount: Amount,
}

/// Result of settling a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Pool the field played for.
    pub pool: ArenaPool,
    /// Non-zero payouts, rank 1 first.
    pub payouts: Vec<Payout>,
    /// Sum of payouts.
    pub total_paid: Amount,
    /// Rounding residual kept by the house.
    pub residual: Amount,
}

impl Settlement {
    /// Audit digest of the settlement.
    pub fn digest(&self) -> AuditHash {
        let mut hasher = AuditHasher::for_settlement();
        hasher.update_u32(self.pool.total_players);
        hasher.update_amount(self.pool.buy_in);
        hasher.update_amount(self.pool.rake_fee);
        hasher.update_amount(self.pool.pool);
        hasher.update_amount(self.pool.rake_total);
        hasher.update_u32(self.payouts.len() as u32);
        for payout in &self.payouts {
            hasher.update_u32(payout.rank);
            hasher.update_str(&payout.player_id);
            hasher.update_amount(payout.amount);
        }
        hasher.update_amount(self.total_paid);
        hasher.update_amount(self.residual);
        hasher.finalize()
    }
}

/// Settle a finished field.
///
/// `standings` must hold one entry per player, ranked 1..=total_players.
pub fn settle(pool: &ArenaPool, standings: &[Standing]) -> Result<Settlement, ArenaError> {
    if standings.len() != pool.total_players as usize {
        return Err(ArenaError::FieldSizeMismatch {
            expected: pool.total_players,
            got: standings.len(),
        });
    }

    let table = PayoutTable::for_field(pool.total_players);
    let mut payouts = Vec::with_capacity(table.paid_places() as usize);
    let mut ranked = vec![false; standings.len()];
    for standing in standings {
        check_rank(standing.rank, pool.total_players)?;
        let slot = &mut ranked[standing.rank as usize - 1];
        if *slot {
            return Err(ArenaError::DuplicateRank(standing.rank));
        }
        *slot = true;

        let amount = prize_from_table(&table, standing.rank, pool.pool)?;
        if !amount.is_zero() {
            payouts.push(Payout {
                rank: standing.rank,
                player_id: standing.entry.player_id.clone(),
                amount,
            });
        }
    }
    payouts.sort_by_key(|p| p.rank);

    let mut total_paid: Amount = payouts.iter().map(|p| p.amount).sum();
    if total_paid > pool.pool {
        let overage = total_paid - pool.pool;
        warn!(
            pool = %pool.pool,
            total_paid = %total_paid,
            overage = %overage,
            "rounding overage, trimming lowest ranks"
        );
        claw_back(&mut payouts, overage.minor());
        payouts.retain(|p| !p.amount.is_zero());
        total_paid = payouts.iter().map(|p| p.amount).sum();
    }
    let residual = pool.pool - total_paid;

    info!(
        players = pool.total_players,
        pool = %pool.pool,
        rake = %pool.rake_total,
        paid_places = payouts.len(),
        total_paid = %total_paid,
        residual = %residual,
        "arena settled"
    );

    Ok(Settlement {
        pool: *pool,
        payouts,
        total_paid,
        residual,
    })
}

/// Remove `cents` from the payouts, one cent per rank per pass, lowest rank
/// first.
fn claw_back(payouts: &mut [Payout], mut cents: u64) {
    while cents > 0 {
        let mut progressed = false;
        for payout in payouts.iter_mut().rev() {
            if cents == 0 {
                break;
            }
            if !payout.amount.is_zero() {
                payout.amount = payout.amount - Amount::from_minor(1);
                cents -= 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
}
