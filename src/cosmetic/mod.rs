//! Cosmetic Presentation Module
//!
//! Seed-derived styling only. Never consulted by game logic.

pub mod environment;
pub mod flags;

pub use environment::{EnvironmentalConfig, PixelOffset};
pub use flags::{environment_for_round, FlagStore, MemoryFlagStore, PresentationFlags};
