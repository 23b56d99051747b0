//! Round Tracking
//!
//! A round pairs one secret with the guesses submitted against it. The
//! caller owns the value and persists it; nothing here is shared.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::code::{Code, CodeError};
use super::evaluate::{evaluate, EvaluationResult};

/// Default attempts allowed per round.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Round outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Guesses still allowed.
    InProgress,
    /// Secret found on the given attempt (1-based).
    Won {
        /// Attempt that solved the round.
        attempts: u32,
    },
    /// Attempts exhausted without a solve.
    Lost,
}

/// Round submission errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Round already won or lost.
    #[error("round already finished")]
    Finished,
    /// Guess failed validation.
    #[error(transparent)]
    Code(#[from] CodeError),
}

/// One submitted guess and its feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Submitted guess.
    pub guess: Code,
    /// Feedback returned.
    pub result: EvaluationResult,
}

/// A single code-breaking round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    secret: Code,
    max_attempts: u32,
    history: Vec<GuessRecord>,
    outcome: RoundOutcome,
}

impl Round {
    /// Start a round with the default attempt limit.
    pub fn new(secret: Code) -> Self {
        Self::with_max_attempts(secret, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a round with a custom attempt limit (at least one).
    pub fn with_max_attempts(secret: Code, max_attempts: u32) -> Self {
        Self {
            secret,
            max_attempts: max_attempts.max(1),
            history: Vec::new(),
            outcome: RoundOutcome::InProgress,
        }
    }

    /// Submit a guess.
    pub fn submit(&mut self, guess: Code) -> Result<EvaluationResult, RoundError> {
        if self.outcome != RoundOutcome::InProgress {
            return Err(RoundError::Finished);
        }

        let result = evaluate(self.secret.as_ref(), guess.as_ref())?;
        self.history.push(GuessRecord { guess, result });

        let attempts = self.attempts();
        if result.is_solved() {
            self.outcome = RoundOutcome::Won { attempts };
        } else if attempts >= self.max_attempts {
            self.outcome = RoundOutcome::Lost;
        }

        Ok(result)
    }

    /// Guesses submitted so far.
    pub fn attempts(&self) -> u32 {
        self.history.len() as u32
    }

    /// Attempts left before the round is lost.
    pub fn remaining(&self) -> u32 {
        match self.outcome {
            RoundOutcome::InProgress => self.max_attempts - self.attempts(),
            _ => 0,
        }
    }

    /// Attempt limit.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Submitted guesses in order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Current outcome.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// True once won or lost.
    pub fn is_finished(&self) -> bool {
        self.outcome != RoundOutcome::InProgress
    }

    /// The secret. Only reveal once the round is finished.
    pub fn secret(&self) -> &Code {
        &self.secret
    }
}
