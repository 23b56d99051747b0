//! Seeded Environment
//!
//! Purely cosmetic presentation parameters derived from a round identifier.
//! Nothing in here feeds back into evaluation, scoring or win/loss: the game
//! module never imports this one.
//!
//! ## Draw Order
//!
//! The stream is sequential, so the order below is part of the contract:
//!
//! ```text
//! 1. Fisher-Yates shuffle of [0..symbol_count)   -> symbol_order
//! 2. (r - 0.5) * 6                                -> rotation_deg  [-3, +3)
//! 3. 0.95 + r * 0.1                               -> spacing       [0.95, 1.05)
//! 4. floor(r * 6)                                 -> background    0..=5
//! 5. symbol_count x (x, y), each (r - 0.5) * 4    -> offsets       [-2, +2) px
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::hash::{AuditHash, AuditHasher};
use crate::core::rng::SeededRng;
use crate::game::symbol::Symbol;

/// Number of background patterns.
pub const BACKGROUND_PATTERNS: usize = 6;

/// Maximum grid rotation magnitude in degrees.
pub const MAX_ROTATION_DEG: f64 = 3.0;

/// Maximum per-axis symbol offset magnitude in pixels.
pub const MAX_OFFSET_PX: f64 = 2.0;

/// Pixel nudge for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelOffset {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// Frozen, seed-derived presentation bundle for one round.
///
/// Built atomically by [`EnvironmentalConfig::generate`] and read-only
/// afterwards: every field is private and only exposed through getters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConfig {
    seed: u32,
    symbol_order: Vec<usize>,
    rotation_deg: f64,
    spacing: f64,
    background_pattern: u8,
    offsets: Vec<PixelOffset>,
    generated_at: DateTime<Utc>,
}

impl EnvironmentalConfig {
    /// Generate the config for a round.
    ///
    /// Pure: the caller supplies `generated_at`, and every other field
    /// depends only on `round_id` and `symbol_count`.
    pub fn generate(round_id: &str, symbol_count: usize, generated_at: DateTime<Utc>) -> Self {
        let mut rng = SeededRng::from_round_id(round_id);
        let seed = rng.seed();

        let mut symbol_order: Vec<usize> = (0..symbol_count).collect();
        rng.shuffle(&mut symbol_order);

        let rotation_deg = (rng.next_f64() - 0.5) * 6.0;
        let spacing = 0.95 + rng.next_f64() * 0.1;
        let background_pattern = rng.next_index(BACKGROUND_PATTERNS) as u8;

        let offsets = (0..symbol_count)
            .map(|_| {
                let x = (rng.next_f64() - 0.5) * 4.0;
                let y = (rng.next_f64() - 0.5) * 4.0;
                PixelOffset { x, y }
            })
            .collect();

        debug!(round_id, seed, symbol_count, "generated environmental config");

        Self {
            seed,
            symbol_order,
            rotation_deg,
            spacing,
            background_pattern,
            offsets,
            generated_at,
        }
    }

    /// Seed derived from the round identifier.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Visual order of symbol indices.
    pub fn symbol_order(&self) -> &[usize] {
        &self.symbol_order
    }

    /// Visual order resolved to alphabet symbols. Indices past the alphabet
    /// are skipped.
    pub fn ordered_symbols(&self) -> Vec<Symbol> {
        self.symbol_order
            .iter()
            .filter_map(|i| Symbol::from_index(*i))
            .collect()
    }

    /// Grid rotation in degrees.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Spacing multiplier.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Background pattern index.
    pub fn background_pattern(&self) -> u8 {
        self.background_pattern
    }

    /// Per-symbol pixel offsets, indexed by symbol index.
    pub fn offsets(&self) -> &[PixelOffset] {
        &self.offsets
    }

    /// When the config was generated.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// True when every seed-derived field matches `other`.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.seed == other.seed
            && self.symbol_order == other.symbol_order
            && self.rotation_deg.to_bits() == other.rotation_deg.to_bits()
            && self.spacing.to_bits() == other.spacing.to_bits()
            && self.background_pattern == other.background_pattern
            && self.offsets == other.offsets
    }

    /// Audit digest over the seed-derived fields (timestamp excluded).
    pub fn digest(&self) -> AuditHash {
        let mut hasher = AuditHasher::for_environment();
        hasher.update_u32(self.seed);
        hasher.update_u32(self.symbol_order.len() as u32);
        for index in &self.symbol_order {
            hasher.update_u32(*index as u32);
        }
        hasher.update_f64(self.rotation_deg);
        hasher.update_f64(self.spacing);
        hasher.update_u8(self.background_pattern);
        for offset in &self.offsets {
            hasher.update_f64(offset.x);
            hasher.update_f64(offset.y);
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_deterministic() {
        let a = EnvironmentalConfig::generate("round-42", 6, fixed_time());
        let b = EnvironmentalConfig::generate("round-42", 6, fixed_time());
        assert_eq!(a, b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_timestamp_is_metadata_only() {
        let a = EnvironmentalConfig::generate("round-42", 6, fixed_time());
        let b = EnvironmentalConfig::generate("round-42", 6, Utc::now());
        assert_ne!(a, b);
        assert!(a.same_layout(&b));
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_known_values() {
        // Pinned against the reference client draw sequence
        let config = EnvironmentalConfig::generate("round-42", 6, fixed_time());
        assert_eq!(config.seed(), 201955);
        assert_eq!(config.symbol_order(), &[3, 1, 5, 4, 2, 0]);
        assert_eq!(config.rotation_deg(), 2.0336802466772497);
        assert_eq!(config.spacing(), 1.0115613863104953);
        assert_eq!(config.background_pattern(), 0);
        assert_eq!(
            config.offsets()[0],
            PixelOffset { x: 0.463360209017992, y: 1.0764021817594767 }
        );
        assert_eq!(
            config.offsets()[5],
            PixelOffset { x: 0.6576416473835707, y: 1.9025559620931745 }
        );
        assert_eq!(
            config.ordered_symbols(),
            vec![
                Symbol::Diamond,
                Symbol::Square,
                Symbol::Hexagon,
                Symbol::Star,
                Symbol::Triangle,
                Symbol::Circle
            ]
        );
    }

    #[test]
    fn test_bounds_hold() {
        for i in 0..500 {
            let config = EnvironmentalConfig::generate(&format!("round-{i}"), 6, fixed_time());
            assert!(config.rotation_deg().abs() <= MAX_ROTATION_DEG);
            assert!((0.95..=1.05).contains(&config.spacing()));
            assert!((config.background_pattern() as usize) < BACKGROUND_PATTERNS);
            assert_eq!(config.offsets().len(), 6);
            for o in config.offsets() {
                assert!(o.x.abs() <= MAX_OFFSET_PX && o.y.abs() <= MAX_OFFSET_PX);
            }

            let mut order = config.symbol_order().to_vec();
            order.sort_unstable();
            assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_different_rounds_differ() {
        let a = EnvironmentalConfig::generate("round-1", 6, fixed_time());
        let b = EnvironmentalConfig::generate("round-2", 6, fixed_time());
        assert!(!a.same_layout(&b));
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_symbol_count_drives_draws() {
        let small = EnvironmentalConfig::generate("round-42", 3, fixed_time());
        assert_eq!(small.symbol_order().len(), 3);
        assert_eq!(small.offsets().len(), 3);

        let empty = EnvironmentalConfig::generate("round-42", 0, fixed_time());
        assert!(empty.symbol_order().is_empty());
        assert!(empty.offsets().is_empty());
    }

    #[test]
    fn test_digest_ignores_timestamp() {
        let a = EnvironmentalConfig::generate("round-42", 6, fixed_time());
        let b = EnvironmentalConfig::generate("round-42", 6, Utc::now());
        assert_ne!(a, b);
        assert_eq!(a.digest(), b.digest());
    }
}
