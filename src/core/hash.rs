//! Audit Digests
//!
//! Provides deterministic hashing of kernel outputs for:
//! - Cross-checking results between independent processes
//! - Settlement audit trails
//! - Regression pinning in tests

use sha2::{Digest, Sha256};

use super::money::Amount;

/// Hash output type (256 bits / 32 bytes)
pub type AuditHash = [u8; 32];

/// Domain separator for payout tables.
pub const PAYOUT_DOMAIN: &[u8] = b"CIPHER_ARENA_PAYOUT_V1";

/// Domain separator for settlements.
pub const SETTLEMENT_DOMAIN: &[u8] = b"CIPHER_ARENA_SETTLEMENT_V1";

/// Domain separator for environmental configs.
pub const ENVIRONMENT_DOMAIN: &[u8] = b"CIPHER_ARENA_ENVIRONMENT_V1";

/// Deterministic hasher for kernel outputs.
///
/// Wraps SHA-256 with helpers for the kernel's value types.
/// Order of updates is critical for determinism.
pub struct AuditHasher {
    hasher: Sha256,
}

impl AuditHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for a payout table.
    pub fn for_payout_table() -> Self {
        Self::new(PAYOUT_DOMAIN)
    }

    /// Create hasher for a settlement.
    pub fn for_settlement() -> Self {
        Self::new(SETTLEMENT_DOMAIN)
    }

    /// Create hasher for an environmental config.
    pub fn for_environment() -> Self {
        Self::new(ENVIRONMENT_DOMAIN)
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f64 by its IEEE-754 bit pattern.
    #[inline]
    pub fn update_f64(&mut self, value: f64) {
        self.update_u64(value.to_bits());
    }

    /// Update with an amount (minor units).
    #[inline]
    pub fn update_amount(&mut self, value: Amount) {
        self.update_u64(value.minor());
    }

    /// Update with a length-prefixed string.
    pub fn update_str(&mut self, value: &str) {
        self.update_u32(value.len() as u32);
        self.hasher.update(value.as_bytes());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> AuditHash {
        self.hasher.finalize().into()
    }
}

// =============================================================================
// TESTS
// =============================================================================
