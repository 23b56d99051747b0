//! Arena Payout Tables
//!
//! Rank-based prize shares in per-mille (thousandths of the pool).
//!
//! ## Canonical Table
//!
//! ```text
//! ┌──────────┬────────┐   ┌──────────┬────────┐
//! │ Rank     │ ‰      │   │ Rank     │ ‰      │
//! ├──────────┼────────┤   ├──────────┼────────┤
//! │ 1        │ 200    │   │ 7        │ 45     │
//! │ 2        │ 130    │   │ 8        │ 38     │
//! │ 3        │ 100    │   │ 9        │ 32     │
//! │ 4        │ 80     │   │ 10       │ 30     │
//! │ 5        │ 65     │   │ 11 - 15  │ 20 ea  │
//! │ 6        │ 55     │   │ 16 - 20  │ 14 ea  │
//! │          │        │   │ 21 - 25  │ 11 ea  │
//! └──────────┴────────┘   └──────────┴────────┘
//! ```
//!
//! Fields paying fewer than 25 places take the top of the table and spread
//! the unused per-mille over those ranks in proportion to their share,
//! flooring each, then give any flooring remainder to rank 1. Every table
//! sums to exactly 1000.

use serde::{Deserialize, Serialize};

use crate::core::hash::{AuditHash, AuditHasher};

/// Per-mille total of every table.
pub const PERMIL_TOTAL: u32 = 1000;

/// Places in the canonical table.
pub const CANONICAL_PLACES: usize = 25;

/// Canonical 25-place table.
pub const CANONICAL_PAYOUT_PERMIL: [u32; CANONICAL_PLACES] = [
    200, 130, 100, 80, 65, 55, 45, 38, 32, 30, // 1-10
    20, 20, 20, 20, 20, // 11-15
    14, 14, 14, 14, 14, // 16-20
    11, 11, 11, 11, 11, // 21-25
];

/// In-the-money cutoff: a quarter of the field, rounded down, at least 1.
pub fn itm_count(total_players: u32) -> u32 {
    (total_players / 4).max(1)
}

/// Per-mille shares for one field size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTable {
    total_players: u32,
    itm_count: u32,
    shares: Vec<u32>,
}

impl PayoutTable {
    /// Build the table for a field.
    ///
    /// # Panics
    ///
    /// Panics if the shares do not close to exactly [`PERMIL_TOTAL`]. A
    /// broken table would corrupt every payout computed from it.
    pub fn for_field(total_players: u32) -> Self {
        let itm_count = itm_count(total_players);
        let places = (itm_count as usize).min(CANONICAL_PLACES);
        let top = &CANONICAL_PAYOUT_PERMIL[..places];

        let used: u32 = top.iter().sum();
        let remainder = PERMIL_TOTAL - used;

        let mut shares: Vec<u32> = top
            .iter()
            .map(|share| share + remainder * share / used)
            .collect();

        let distributed: u32 = shares.iter().sum();
        shares[0] += PERMIL_TOTAL - distributed;

        let table = Self {
            total_players,
            itm_count,
            shares,
        };
        assert_eq!(
            table.total_permil(),
            PERMIL_TOTAL,
            "payout table for {total_players} players does not close"
        );
        table
    }

    /// Field size the table was built for.
    pub fn total_players(&self) -> u32 {
        self.total_players
    }

    /// In-the-money cutoff for the field.
    pub fn itm_count(&self) -> u32 {
        self.itm_count
    }

    /// Ranks that receive a non-zero share (at most 25).
    pub fn paid_places(&self) -> u32 {
        self.shares.len() as u32
    }

    /// Share for a 1-based rank; zero outside the paid places.
    pub fn share(&self, rank: u32) -> u32 {
        match rank {
            0 => 0,
            r => self.shares.get(r as usize - 1).copied().unwrap_or(0),
        }
    }

    /// All shares, rank 1 first.
    pub fn shares(&self) -> &[u32] {
        &self.shares
    }

    /// Sum of all shares.
    pub fn total_permil(&self) -> u32 {
        self.shares.iter().sum()
    }

    /// Audit digest of the table.
    pub fn digest(&self) -> AuditHash {
        let mut hasher = AuditHasher::for_payout_table();
        hasher.update_u32(self.total_players);
        hasher.update_u32(self.itm_count);
        hasher.update_u32(self.shares.len() as u32);
        for share in &self.shares {
            hasher.update_u32(*share);
        }
        hasher.finalize()
    }
}
