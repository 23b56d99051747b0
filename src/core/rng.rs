//! Deterministic Random Number Generator
//!
//! Uses the Mulberry32 algorithm: one 32-bit state word, a fixed odd
//! increment per draw and two rounds of xor-shift/multiply mixing.
//! Given the same seed, produces identical sequence on all platforms, and
//! matches the reference browser client draw for draw.

use serde::{Deserialize, Serialize};

/// Increment added to the state word on every draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as a float, used to normalise a draw into [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic PRNG using the Mulberry32 algorithm.
///
/// # Determinism Guarantee
///
/// Given the same seed, this RNG will produce the exact same sequence
/// of numbers on any platform (x86, ARM, WASM).
///
/// # Example
///
/// ```
/// use cipher_arena::core::rng::SeededRng;
///
/// let mut rng = SeededRng::new(42);
/// assert_eq!(rng.next_u32(), 2581720956); // Always the same!
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    seed: u32,
    state: u32,
}

impl SeededRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// Every seed is valid, including zero.
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Create an RNG from a round or room identifier.
    pub fn from_round_id(round_id: &str) -> Self {
        Self::new(string_to_seed(round_id))
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate the next 32-bit mixed value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate the next value in [0, 1).
    ///
    /// The result is always `next_u32() / 2^32`, which is exactly
    /// representable as an `f64`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Generate an index in range [0, bound).
    ///
    /// Equal to `floor(next_f64() * bound)`, computed in integers so no
    /// float rounding can creep in. Returns 0 when `bound` is 0.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * bound as u64) >> 32) as usize
    }

    /// Shuffle a slice in place using Fisher-Yates.
    ///
    /// Walks from the last index down to 1, swapping element `i` with
    /// `floor(next_f64() * (i + 1))`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in (1..len).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Select a random element from a slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            None
        } else {
            let idx = self.next_index(slice.len());
            Some(&slice[idx])
        }
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: u32) {
        self.state = state;
    }
}

/// Fold an arbitrary identifier into a 32-bit seed.
///
/// Rolling polynomial hash over UTF-16 code units
/// (`hash = hash * 31 + unit`, wrapped to a signed 32-bit integer), then the
/// absolute value. `i32::MIN` folds to `2^31`, which is why the result is
/// unsigned.
pub fn string_to_seed(input: &str) -> u32 {
    let hash = input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs()
}

// =============================================================================
// TESTS
// =============================================================================
