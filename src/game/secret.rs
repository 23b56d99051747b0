//! Secret Generation
//!
//! Draws a [`CODE_LENGTH`]-symbol secret without repetition.
//!
//! - Random mode pulls fresh entropy per call and is not reproducible.
//! - Seeded mode runs a Fisher-Yates shuffle over the alphabet indices with
//!   a [`SeededRng`] and keeps the first [`CODE_LENGTH`] entries, so any
//!   client holding the seed derives the same secret.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::core::rng::SeededRng;

use super::code::{Code, CODE_LENGTH};
use super::symbol::{Symbol, ALPHABET, SYMBOL_COUNT};

/// Generate a secret from fresh thread-local entropy.
pub fn generate_secret() -> Code {
    generate_secret_with(&mut rand::thread_rng())
}

/// Generate a secret from a caller-supplied entropy source.
pub fn generate_secret_with<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let mut symbols = [Symbol::Circle; CODE_LENGTH];
    for (slot, symbol) in symbols
        .iter_mut()
        .zip(ALPHABET.choose_multiple(rng, CODE_LENGTH))
    {
        *slot = *symbol;
    }
    from_distinct(symbols)
}

/// Generate a secret from an integer seed.
pub fn generate_seeded_secret(seed: u32) -> Code {
    let code = draw_seeded_secret(&mut SeededRng::new(seed));
    debug!(seed, "generated seeded secret");
    #[cfg(feature = "debug-tracing")]
    tracing::trace!(seed, secret = %code, "seeded secret");
    code
}

/// Draw a secret from an existing seeded stream.
///
/// Consumes `SYMBOL_COUNT - 1` draws from `rng`.
pub fn draw_seeded_secret(rng: &mut SeededRng) -> Code {
    let mut indices: [usize; SYMBOL_COUNT] = std::array::from_fn(|i| i);
    rng.shuffle(&mut indices);

    let symbols = std::array::from_fn(|i| ALPHABET[indices[i]]);
    from_distinct(symbols)
}

/// Both generators draw without replacement, so the symbols are distinct.
fn from_distinct(symbols: [Symbol; CODE_LENGTH]) -> Code {
    match Code::new(symbols) {
        Ok(code) => code,
        Err(err) => unreachable!("secret drawn without replacement repeated: {err}"),
    }
}
