//! Guess Evaluation
//!
//! Scores a guess against a secret with the multiset-aware exact/present
//! rule. Inputs are symbols only; nothing presentational can reach this
//! module.
//!
//! ## Algorithm
//!
//! 1. `exact` counts positions where secret and guess agree.
//! 2. Leftover (non-exact) secret and guess entries are tallied per symbol.
//! 3. `present` is the sum over symbols of `min(secret_left, guess_left)`.
//!
//! A secret symbol instance earns at most one credit, so repeated guesses of
//! the same symbol never inflate `present`.

use serde::{Deserialize, Serialize};

use super::code::{parse_ids, CodeError, CODE_LENGTH};
use super::symbol::{Symbol, SYMBOL_COUNT};

/// Feedback for one guess.
///
/// `exact` are right symbol in the right place, `present` are right symbol
/// in the wrong place. Always `exact + present <= CODE_LENGTH`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Exact matches.
    pub exact: u8,
    /// Partial matches.
    pub present: u8,
}

impl EvaluationResult {
    /// Every position matched.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Evaluate a guess against a secret.
///
/// Both sequences must be exactly [`CODE_LENGTH`] long. The guess may repeat
/// symbols; the secret is taken as given.
pub fn evaluate(secret: &[Symbol], guess: &[Symbol]) -> Result<EvaluationResult, CodeError> {
    check_length(secret)?;
    check_length(guess)?;

    let mut exact = 0u8;
    let mut secret_left = [0u8; SYMBOL_COUNT];
    let mut guess_left = [0u8; SYMBOL_COUNT];

    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            secret_left[s.index()] += 1;
            guess_left[g.index()] += 1;
        }
    }

    let present = secret_left
        .iter()
        .zip(&guess_left)
        .map(|(s, g)| (*s).min(*g))
        .sum();

    Ok(EvaluationResult { exact, present })
}

/// Evaluate from symbol identifiers.
pub fn evaluate_ids<S: AsRef<str>, G: AsRef<str>>(
    secret: &[S],
    guess: &[G],
) -> Result<EvaluationResult, CodeError> {
    let secret = parse_ids(secret)?;
    let guess = parse_ids(guess)?;
    evaluate(&secret, &guess)
}

fn check_length(symbols: &[Symbol]) -> Result<(), CodeError> {
    if symbols.len() != CODE_LENGTH {
        return Err(CodeError::LengthMismatch {
            expected: CODE_LENGTH,
            got: symbols.len(),
        });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::code::Code;
    use crate::game::symbol::ALPHABET;
    use proptest::prelude::*;
    use Symbol::*;

    fn result(exact: u8, present: u8) -> EvaluationResult {
        EvaluationResult { exact, present }
    }

    #[test]
    fn test_reference_scenario() {
        let secret = [Circle, Hexagon, Square, Star];
        let guess = [Circle, Star, Square, Triangle];
        assert_eq!(evaluate(&secret, &guess), Ok(result(2, 1)));
    }

    #[test]
    fn test_swap_scenario() {
        let secret = [Circle, Square, Triangle, Diamond];
        let guess = [Square, Circle, Star, Hexagon];
        assert_eq!(evaluate(&secret, &guess), Ok(result(0, 2)));
    }

    #[test]
    fn test_multiset_cap() {
        // Only one circle in the secret, so only one credit total
        let secret = [Circle, Square, Triangle, Diamond];
        let guess = [Circle, Circle, Circle, Circle];
        assert_eq!(evaluate(&secret, &guess), Ok(result(1, 0)));

        // Circle sits elsewhere in the secret: one partial, not four
        let secret = [Square, Triangle, Circle, Diamond];
        let guess = [Hexagon, Circle, Star, Circle];
        assert_eq!(evaluate(&secret, &guess), Ok(result(0, 1)));
    }

    #[test]
    fn test_no_overlap() {
        let secret = [Circle, Square, Triangle, Diamond];
        let guess = [Star, Hexagon, Star, Hexagon];
        assert_eq!(evaluate(&secret, &guess), Ok(result(0, 0)));
    }

    #[test]
    fn test_all_present_none_exact() {
        let secret = [Circle, Square, Triangle, Diamond];
        let guess = [Diamond, Triangle, Square, Circle];
        assert_eq!(evaluate(&secret, &guess), Ok(result(0, 4)));
    }

    #[test]
    fn test_solved() {
        let secret = [Star, Circle, Hexagon, Square];
        let r = evaluate(&secret, &secret).unwrap();
        assert_eq!(r, result(4, 0));
        assert!(r.is_solved());
        assert!(!result(3, 1).is_solved());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let secret = [Circle, Square, Triangle, Diamond];
        assert_eq!(
            evaluate(&secret, &[Circle, Square, Triangle]),
            Err(CodeError::LengthMismatch { expected: 4, got: 3 })
        );
        assert_eq!(
            evaluate(&[Circle], &secret),
            Err(CodeError::LengthMismatch { expected: 4, got: 1 })
        );
    }

    #[test]
    fn test_evaluate_ids() {
        assert_eq!(
            evaluate_ids(
                &["circle", "hexagon", "square", "star"],
                &["circle", "star", "square", "triangle"]
            ),
            Ok(result(2, 1))
        );
        assert_eq!(
            evaluate_ids(&["circle", "hexagon", "square", "star"], &["circle", "x", "y", "z"]),
            Err(CodeError::UnknownSymbol("x".to_string()))
        );
    }

    #[test]
    fn test_accepts_code_values() {
        let secret = Code::new([Circle, Square, Triangle, Diamond]).unwrap();
        let guess = Code::new([Square, Circle, Star, Hexagon]).unwrap();
        assert_eq!(evaluate(secret.as_ref(), guess.as_ref()), Ok(result(0, 2)));
    }

    fn arb_symbol() -> impl Strategy<Value = Symbol> {
        (0..SYMBOL_COUNT).prop_map(|i| ALPHABET[i])
    }

    fn arb_secret() -> impl Strategy<Value = Vec<Symbol>> {
        Just(ALPHABET.to_vec())
            .prop_shuffle()
            .prop_map(|mut v| {
                v.truncate(CODE_LENGTH);
                v
            })
    }

    proptest! {
        #[test]
        fn prop_credits_bounded(
            secret in arb_secret(),
            guess in prop::collection::vec(arb_symbol(), CODE_LENGTH),
        ) {
            let r = evaluate(&secret, &guess).unwrap();
            prop_assert!(r.exact as usize + r.present as usize <= CODE_LENGTH);
        }

        #[test]
        fn prop_self_evaluation_solves(secret in arb_secret()) {
            prop_assert_eq!(
                evaluate(&secret, &secret).unwrap(),
                EvaluationResult { exact: CODE_LENGTH as u8, present: 0 }
            );
        }

        #[test]
        fn prop_idempotent(
            secret in arb_secret(),
            guess in prop::collection::vec(arb_symbol(), CODE_LENGTH),
        ) {
            let first = evaluate(&secret, &guess).unwrap();
            for _ in 0..5 {
                prop_assert_eq!(evaluate(&secret, &guess).unwrap(), first);
            }
        }

        #[test]
        fn prop_distinct_codes_are_symmetric(a in arb_secret(), b in arb_secret()) {
            // Without repeats on either side the rule is symmetric
            prop_assert_eq!(evaluate(&a, &b).unwrap(), evaluate(&b, &a).unwrap());
        }
    }
}
