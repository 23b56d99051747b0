//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform determinism.
//! They form the foundation for auditable, reproducible kernel results.

pub mod rng;
pub mod money;
pub mod hash;

// Re-export core types
pub use rng::{string_to_seed, SeededRng};
pub use money::{Amount, AmountError};
pub use hash::{AuditHash, AuditHasher};
