//! Tier Economy
//!
//! Splits a player's energy into locked and available portions. The locked
//! part reserves the tier's base amount plus the cost of every invite slot
//! the player has not used yet, and never exceeds what the player holds.
//!
//! ```text
//! slots_remaining = max(0, max_invites - invites_sent)
//! total_locked    = slots_remaining * cost_per_invite + base_locked
//! locked          = min(total_locked, energy)
//! available       = energy - locked
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::money::Amount;

/// Player tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Founding members.
    Genesis,
    /// Invited by genesis members.
    Pioneer,
    /// Lowest tier, and the fallback for unknown names.
    Settler,
}

/// Tier used when a name is not recognised.
pub const DEFAULT_TIER: Tier = Tier::Settler;

/// Per-tier economy constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEconomyConfig {
    /// Invites the tier may issue.
    pub max_invites: u32,
    /// Energy reserved per unused invite slot.
    pub cost_per_invite: Amount,
    /// Tier given to invited players.
    pub invite_tier: Tier,
    /// Energy always reserved for the tier.
    pub base_locked: Amount,
}

const GENESIS_CONFIG: TierEconomyConfig = TierEconomyConfig {
    max_invites: 10,
    cost_per_invite: Amount::from_major(50),
    invite_tier: Tier::Pioneer,
    base_locked: Amount::from_major(100),
};

const PIONEER_CONFIG: TierEconomyConfig = TierEconomyConfig {
    max_invites: 5,
    cost_per_invite: Amount::from_major(25),
    invite_tier: Tier::Settler,
    base_locked: Amount::from_major(25),
};

const SETTLER_CONFIG: TierEconomyConfig = TierEconomyConfig {
    max_invites: 2,
    cost_per_invite: Amount::from_major(10),
    invite_tier: Tier::Settler,
    base_locked: Amount::ZERO,
};

impl Tier {
    /// All tiers, highest first.
    pub const ALL: [Tier; 3] = [Tier::Genesis, Tier::Pioneer, Tier::Settler];

    /// Stable label.
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Genesis => "genesis",
            Tier::Pioneer => "pioneer",
            Tier::Settler => "settler",
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Resolve a tier name, falling back to [`DEFAULT_TIER`].
    ///
    /// An unknown tier must never block a balance query. The second value
    /// reports whether the fallback was taken.
    pub fn resolve(label: &str) -> (Self, bool) {
        match Self::from_label(label) {
            Some(tier) => (tier, false),
            None => {
                warn!(tier = label, fallback = DEFAULT_TIER.label(), "unknown tier, using fallback");
                (DEFAULT_TIER, true)
            }
        }
    }

    /// Economy constants for the tier.
    pub const fn config(self) -> &'static TierEconomyConfig {
        match self {
            Tier::Genesis => &GENESIS_CONFIG,
            Tier::Pioneer => &PIONEER_CONFIG,
            Tier::Settler => &SETTLER_CONFIG,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Debit authorisation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Requested debit exceeds the available balance.
    #[error("insufficient available balance: requested {requested}, available {available}")]
    InsufficientAvailable {
        /// Amount requested.
        requested: Amount,
        /// Amount available.
        available: Amount,
    },
}

/// Derived balance split for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceBreakdown {
    /// Tier the numbers were computed for.
    pub tier: Tier,
    /// True when the requested tier was unknown.
    pub tier_fallback: bool,
    /// Total energy held.
    pub total: Amount,
    /// Locked energy, capped at `total`.
    pub locked: Amount,
    /// Spendable energy.
    pub available: Amount,
    /// Tier base reserve.
    pub base_locked: Amount,
    /// Reserve for unused invite slots.
    pub invite_locked: Amount,
    /// Invites the tier may issue.
    pub max_invites: u32,
    /// Invites already sent.
    pub invites_sent: u32,
    /// Unused invite slots.
    pub slots_remaining: u32,
    /// Cost per invite slot.
    pub cost_per_invite: Amount,
    /// Tier given to invited players.
    pub invite_tier: Tier,
}

impl BalanceBreakdown {
    /// Compute the breakdown for a tier name.
    pub fn calculate(energy: Amount, tier: &str, invites_sent: u32) -> Self {
        let (tier, tier_fallback) = Tier::resolve(tier);
        Self::for_tier(energy, tier, invites_sent, tier_fallback)
    }

    fn for_tier(energy: Amount, tier: Tier, invites_sent: u32, tier_fallback: bool) -> Self {
        let config = tier.config();
        let slots_remaining = config.max_invites.saturating_sub(invites_sent);
        let invite_locked = config.cost_per_invite.saturating_mul(slots_remaining as u64);
        let total_locked = invite_locked + config.base_locked;
        let locked = total_locked.min(energy);
        let available = energy.saturating_sub(locked);

        Self {
            tier,
            tier_fallback,
            total: energy,
            locked,
            available,
            base_locked: config.base_locked,
            invite_locked,
            max_invites: config.max_invites,
            invites_sent,
            slots_remaining,
            cost_per_invite: config.cost_per_invite,
            invite_tier: config.invite_tier,
        }
    }

    /// Uncapped locked requirement.
    pub fn total_locked(&self) -> Amount {
        self.invite_locked + self.base_locked
    }

    /// Check a debit against the available ceiling.
    pub fn authorize_debit(&self, amount: Amount) -> Result<(), BalanceError> {
        if amount > self.available {
            return Err(BalanceError::InsufficientAvailable {
                requested: amount,
                available: self.available,
            });
        }
        Ok(())
    }
}

/// Compute a balance breakdown.
pub fn calculate_balance_breakdown(energy: Amount, tier: &str, invites_sent: u32) -> BalanceBreakdown {
    BalanceBreakdown::calculate(energy, tier, invites_sent)
}
