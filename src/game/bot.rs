//! Bot Opponents
//!
//! A bot keeps every code still consistent with the feedback it has seen
//! and guesses one of them at random from its own seeded stream. Two bots
//! with the same seed facing the same secret play identical games.

use tracing::debug;

use crate::core::rng::SeededRng;

use super::code::{Code, CODE_LENGTH};
use super::evaluate::{evaluate, EvaluationResult};
use super::round::{Round, RoundError, RoundOutcome};
use super::symbol::{Symbol, ALPHABET};

/// Every valid code, in lexicographic alphabet-index order.
pub fn all_codes() -> Vec<Code> {
    let mut codes = Vec::new();
    let mut current = Vec::with_capacity(CODE_LENGTH);
    extend_codes(&mut current, &mut codes);
    codes
}

fn extend_codes(current: &mut Vec<Symbol>, out: &mut Vec<Code>) {
    if current.len() == CODE_LENGTH {
        if let Ok(code) = Code::from_slice(current) {
            out.push(code);
        }
        return;
    }
    for symbol in ALPHABET {
        if !current.contains(&symbol) {
            current.push(symbol);
            extend_codes(current, out);
            current.pop();
        }
    }
}

/// Seeded consistent-candidate solver.
#[derive(Clone, Debug)]
pub struct Bot {
    rng: SeededRng,
    candidates: Vec<Code>,
}

impl Bot {
    /// Create a bot drawing from `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SeededRng::new(seed),
            candidates: all_codes(),
        }
    }

    /// Codes still consistent with all feedback.
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Pick the next guess. `None` if feedback was contradictory.
    pub fn next_guess(&mut self) -> Option<Code> {
        self.rng.choose(&self.candidates).copied()
    }

    /// Narrow the candidate set with feedback for `guess`.
    pub fn observe(&mut self, guess: Code, result: EvaluationResult) {
        self.candidates
            .retain(|c| evaluate(c.as_ref(), guess.as_ref()) == Ok(result));
    }

    /// Play a round to completion.
    pub fn play(&mut self, round: &mut Round) -> Result<RoundOutcome, RoundError> {
        while !round.is_finished() {
            let Some(guess) = self.next_guess() else {
                break;
            };
            let result = round.submit(guess)?;
            self.observe(guess, result);
            debug!(
                attempt = round.attempts(),
                exact = result.exact,
                present = result.present,
                remaining_candidates = self.candidates.len(),
                "bot guess"
            );
        }
        Ok(round.outcome())
    }
}
