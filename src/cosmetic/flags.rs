//! Presentation Flags
//!
//! Environment and tutorial toggles are caller-supplied state. The kernel
//! reads them through [`FlagStore`] instead of any process-wide cache.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::environment::EnvironmentalConfig;

/// Key for the seeded environment toggle.
pub const SEEDED_ENVIRONMENT_KEY: &str = "seeded_environment";

/// Key for the tutorial-seen marker.
pub const TUTORIAL_SEEN_KEY: &str = "tutorial_seen";

/// Minimal key-value store for boolean flags.
pub trait FlagStore {
    /// Read a flag, `None` if never set.
    fn get(&self, key: &str) -> Option<bool>;

    /// Write a flag.
    fn set(&mut self, key: &str, value: bool);
}

/// In-memory flag store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryFlagStore {
    flags: BTreeMap<String, bool>,
}

impl MemoryFlagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }
}

/// Snapshot of the flags the kernel cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationFlags {
    /// Apply the seeded environment skin.
    pub seeded_environment: bool,
    /// Player has completed the tutorial.
    pub tutorial_seen: bool,
}

impl Default for PresentationFlags {
    fn default() -> Self {
        Self {
            seeded_environment: true,
            tutorial_seen: false,
        }
    }
}

impl PresentationFlags {
    /// Load flags, using defaults for unset keys.
    pub fn load(store: &dyn FlagStore) -> Self {
        let defaults = Self::default();
        Self {
            seeded_environment: store
                .get(SEEDED_ENVIRONMENT_KEY)
                .unwrap_or(defaults.seeded_environment),
            tutorial_seen: store.get(TUTORIAL_SEEN_KEY).unwrap_or(defaults.tutorial_seen),
        }
    }

    /// Persist flags.
    pub fn save(&self, store: &mut dyn FlagStore) {
        store.set(SEEDED_ENVIRONMENT_KEY, self.seeded_environment);
        store.set(TUTORIAL_SEEN_KEY, self.tutorial_seen);
    }
}

/// Environmental config for a round, or `None` when the skin is disabled.
pub fn environment_for_round(
    flags: &PresentationFlags,
    round_id: &str,
    symbol_count: usize,
    generated_at: DateTime<Utc>,
) -> Option<EnvironmentalConfig> {
    flags
        .seeded_environment
        .then(|| EnvironmentalConfig::generate(round_id, symbol_count, generated_at))
}
