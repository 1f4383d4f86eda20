//! Progress type definitions

use crate::tiers::Tier;
use serde::{Deserialize, Serialize};

/// Where a user's XP sits on the ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// XP that was classified (negative input is reported as 0)
    pub experience: u64,

    /// Tier containing `experience`
    pub current: Tier,

    /// Successor tier, `None` at the top
    pub next: Option<Tier>,

    /// XP still needed to reach `next`
    pub xp_to_next: Option<u64>,

    /// Fraction of the current tier completed (0.0 to 1.0, 1.0 at the top)
    pub percent_through_tier: f64,
}

impl ProgressSnapshot {
    /// Whether the user sits in the open-ended top tier
    pub fn is_max_tier(&self) -> bool {
        self.next.is_none()
    }
}

/// A tier change caused by an XP increase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// Tier before the increase
    pub from: Tier,

    /// Tier after the increase
    pub to: Tier,

    /// Number of tiers crossed (at least 1)
    pub tiers_gained: u32,
}
