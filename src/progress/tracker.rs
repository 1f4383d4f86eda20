//! XP progress tracking
//!
//! Experience is monotonic non-decreasing: awards saturate, nothing is
//! ever subtracted.

use crate::progress::types::{LevelUp, ProgressSnapshot};
use crate::tiers::TierTable;
use tracing::{debug, info};

impl ProgressSnapshot {
    /// Classify `xp` and compute progress toward the next tier
    pub fn capture(table: &TierTable, xp: i64) -> Self {
        let experience = xp.max(0) as u64;
        let current = table.resolve_by_experience(xp);
        let next = table.resolve_next(i64::from(current.ordinal));

        let xp_to_next = next.map(|tier| tier.min_threshold.saturating_sub(experience));

        let percent_through_tier = match current.span() {
            Some(span) if next.is_some() => {
                let into_tier = experience.saturating_sub(current.min_threshold);
                (into_tier as f64 / span as f64).clamp(0.0, 1.0)
            }
            _ => 1.0,
        };

        Self {
            experience,
            current: current.clone(),
            next: next.cloned(),
            xp_to_next,
            percent_through_tier,
        }
    }
}

/// Add `points` to `current`, saturating at `u64::MAX`
pub fn award_experience(current: u64, points: u64) -> u64 {
    current.saturating_add(points)
}

/// Report a level up when `after` lands in a higher tier than `before`
pub fn detect_level_up(table: &TierTable, before: u64, after: u64) -> Option<LevelUp> {
    let from = table.resolve_by_experience(clamp_to_i64(before));
    let to = table.resolve_by_experience(clamp_to_i64(after));

    if to.ordinal <= from.ordinal {
        return None;
    }

    Some(LevelUp {
        from: from.clone(),
        to: to.clone(),
        tiers_gained: to.ordinal - from.ordinal,
    })
}

fn clamp_to_i64(xp: u64) -> i64 {
    i64::try_from(xp).unwrap_or(i64::MAX)
}

/// Running XP total for one user, classified against a shared ladder
#[derive(Debug, Clone)]
pub struct ProgressTracker<'a> {
    /// Ladder used for classification
    table: &'a TierTable,

    /// Accumulated XP
    experience: u64,

    /// Level ups seen since creation
    level_ups: Vec<LevelUp>,
}

impl<'a> ProgressTracker<'a> {
    /// Start tracking from zero XP
    pub fn new(table: &'a TierTable) -> Self {
        Self::with_experience(table, 0)
    }

    /// Start tracking from a stored XP total
    pub fn with_experience(table: &'a TierTable, experience: u64) -> Self {
        Self {
            table,
            experience,
            level_ups: Vec::new(),
        }
    }

    /// Award XP for a completed activity
    pub fn award(&mut self, points: u64) -> Option<LevelUp> {
        let before = self.experience;
        self.experience = award_experience(before, points);
        debug!(before, after = self.experience, points, "experience awarded");

        let level_up = detect_level_up(self.table, before, self.experience);
        if let Some(ref up) = level_up {
            info!(
                from = %up.from.label,
                to = %up.to.label,
                tiers_gained = up.tiers_gained,
                "level up"
            );
            self.level_ups.push(up.clone());
        }
        level_up
    }

    /// Current XP total
    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Current progress view
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::capture(self.table, clamp_to_i64(self.experience))
    }

    /// Level ups recorded so far, oldest first
    pub fn level_ups(&self) -> &[LevelUp] {
        &self.level_ups
    }
}
