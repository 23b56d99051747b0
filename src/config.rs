//! Arena Configuration
//!
//! Parameters for running an arena, with environment overrides for the
//! demo binary and integration harnesses.

use std::str::FromStr;

use tracing::warn;

use crate::core::money::Amount;
use crate::game::round::DEFAULT_MAX_ATTEMPTS;

/// Arena run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Buy-in per entrant.
    pub buy_in: Amount,
    /// Rake taken from each buy-in.
    pub rake_fee: Amount,
    /// Entrants, bots included.
    pub field_size: u32,
    /// Attempts allowed per round.
    pub max_attempts: u32,
    /// Seed for secrets and bot streams.
    pub seed: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            buy_in: Amount::from_major(10),
            rake_fee: Amount::from_major(1),
            field_size: 37,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: 12345,
        }
    }
}

impl ArenaConfig {
    /// Create config from environment variables.
    ///
    /// Reads `ARENA_BUY_IN`, `ARENA_RAKE_FEE`, `ARENA_FIELD_SIZE`,
    /// `ARENA_MAX_ATTEMPTS` and `ARENA_SEED`. Missing or unparseable values
    /// keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            buy_in: parse_or(&lookup, "ARENA_BUY_IN", defaults.buy_in),
            rake_fee: parse_or(&lookup, "ARENA_RAKE_FEE", defaults.rake_fee),
            field_size: parse_or(&lookup, "ARENA_FIELD_SIZE", defaults.field_size),
            max_attempts: parse_or(&lookup, "ARENA_MAX_ATTEMPTS", defaults.max_attempts),
            seed: parse_or(&lookup, "ARENA_SEED", defaults.seed),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "invalid config value, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_empty_lookup_uses_defaults() {
        assert_eq!(ArenaConfig::from_lookup(|_| None), ArenaConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: BTreeMap<&str, &str> = [
            ("ARENA_BUY_IN", "25.50"),
            ("ARENA_RAKE_FEE", "2"),
            ("ARENA_FIELD_SIZE", "100"),
            ("ARENA_SEED", "7"),
        ]
        .into_iter()
        .collect();

        let config = ArenaConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.buy_in, Amount::from_minor(2550));
        assert_eq!(config.rake_fee, Amount::from_major(2));
        assert_eq!(config.field_size, 100);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn test_invalid_value_keeps_default() {
        let config = ArenaConfig::from_lookup(|k| (k == "ARENA_FIELD_SIZE").then(|| "lots".to_string()));
        assert_eq!(config.field_size, ArenaConfig::default().field_size);
    }
}
