//! Field Standings
//!
//! Orders a finished field into ranks. Solvers beat non-solvers, then fewer
//! attempts, then less elapsed time, then player id so the order is total.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::round::{Round, RoundOutcome};

use super::arena::ArenaError;

/// One player's finished result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// Player identifier.
    pub player_id: String,
    /// Player cracked the secret.
    pub solved: bool,
    /// Guesses used.
    pub attempts: u32,
    /// Time taken in milliseconds.
    pub elapsed_ms: u64,
}

impl FieldEntry {
    /// Build an entry from a finished round.
    pub fn from_round(player_id: impl Into<String>, round: &Round, elapsed_ms: u64) -> Self {
        Self {
            player_id: player_id.into(),
            solved: matches!(round.outcome(), RoundOutcome::Won { .. }),
            attempts: round.attempts(),
            elapsed_ms,
        }
    }
}

/// A ranked entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based finishing position.
    pub rank: u32,
    /// The entry.
    pub entry: FieldEntry,
}

/// Rank a field. Player ids must be unique.
pub fn rank_field(mut entries: Vec<FieldEntry>) -> Result<Vec<Standing>, ArenaError> {
    let mut seen = BTreeSet::new();
    for entry in &entries {
        if !seen.insert(entry.player_id.as_str()) {
            return Err(ArenaError::DuplicatePlayer(entry.player_id.clone()));
        }
    }

    entries.sort_by(|a, b| {
        (!a.solved, a.attempts, a.elapsed_ms, &a.player_id)
            .cmp(&(!b.solved, b.attempts, b.elapsed_ms, &b.player_id))
    });

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Standing {
            rank: i as u32 + 1,
            entry,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::code::Code;
    use crate::game::symbol::Symbol::*;

    fn entry(id: &str, solved: bool, attempts: u32, elapsed_ms: u64) -> FieldEntry {
        FieldEntry {
            player_id: id.to_string(),
            solved,
            attempts,
            elapsed_ms,
        }
    }

    fn ids(standings: &[Standing]) -> Vec<&str> {
        standings.iter().map(|s| s.entry.player_id.as_str()).collect()
    }

    #[test]
    fn test_ordering_rules() {
        let standings = rank_field(vec![
            entry("slow", true, 4, 90_000),
            entry("lost", false, 10, 10_000),
            entry("fast", true, 4, 30_000),
            entry("lucky", true, 2, 60_000),
        ])
        .unwrap();

        assert_eq!(ids(&standings), vec!["lucky", "fast", "slow", "lost"]);
        assert_eq!(standings.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_full_tie_broken_by_id() {
        let standings = rank_field(vec![
            entry("bravo", true, 5, 1000),
            entry("alpha", true, 5, 1000),
        ])
        .unwrap();
        assert_eq!(ids(&standings), vec!["alpha", "bravo"]);
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let err = rank_field(vec![entry("a", true, 1, 1), entry("a", false, 3, 1)]).unwrap_err();
        assert_eq!(err, ArenaError::DuplicatePlayer("a".to_string()));
    }

    #[test]
    fn test_from_round() {
        let secret = Code::new([Circle, Square, Triangle, Diamond]).unwrap();
        let mut round = Round::new(secret);
        round.submit(secret).unwrap();

        let e = FieldEntry::from_round("p1", &round, 1234);
        assert_eq!(e, entry("p1", true, 1, 1234));
    }
}
