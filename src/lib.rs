//! codesrock-levels - XP Progression Engine
//!
//! Classifies a student's accumulated experience points into the CodesRock
//! tier ladder and reports progress toward the next tier.
//!
//! # Architecture
//!
//! - **tiers**: tier model, validated table, built-in ladder
//! - **progress**: progress snapshots, level-up detection, XP accumulation
//! - **config**: TOML ladder definitions

pub mod errors;
pub mod tiers;
pub mod progress;
pub mod config;
pub mod cli;

// Re-export commonly used types
pub use errors::{ProgressionError, Result};
pub use tiers::{codesrock_ladder, Tier, TierTable};
pub use progress::{LevelUp, ProgressSnapshot, ProgressTracker};
pub use config::LevelsConfig;
