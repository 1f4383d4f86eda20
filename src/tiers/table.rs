//! Validated tier table
//! Implements XP classification over a partition of the non-negative integers

use crate::errors::{ProgressionError, Result};
use crate::tiers::types::Tier;
use std::collections::HashSet;
use tracing::debug;

/// Immutable, validated tier ladder
///
/// Guarantees (checked in [`TierTable::new`]):
/// - Non-empty, ordinals run 1..=N without gaps
/// - Tier 1 starts at 0 XP
/// - max[i] + 1 == min[i+1] for every adjacent pair
/// - Exactly one open-ended tier, and it is tier N
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Build a table, rejecting any tier list that breaks the partition invariant
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        Self::validate(&tiers)?;
        debug!(tiers = tiers.len(), "tier table validated");
        Ok(Self { tiers })
    }

    fn validate(tiers: &[Tier]) -> Result<()> {
        let first = tiers.first().ok_or(ProgressionError::EmptyTable)?;

        for (position, tier) in tiers.iter().enumerate() {
            let expected = position as u32 + 1;
            if tier.ordinal != expected {
                return Err(ProgressionError::NonContiguousOrdinal {
                    position,
                    expected,
                    found: tier.ordinal,
                });
            }
        }

        let mut labels = HashSet::new();
        for tier in tiers {
            if !labels.insert(tier.label.as_str()) {
                return Err(ProgressionError::DuplicateLabel {
                    label: tier.label.clone(),
                });
            }
        }

        if first.min_threshold != 0 {
            return Err(ProgressionError::FirstTierNotZero {
                min_threshold: first.min_threshold,
            });
        }

        for tier in tiers {
            if let Some(max) = tier.max_threshold {
                if max < tier.min_threshold {
                    return Err(ProgressionError::InvertedRange {
                        ordinal: tier.ordinal,
                        min_threshold: tier.min_threshold,
                        max_threshold: max,
                    });
                }
            }
        }

        for pair in tiers.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            let max = current.max_threshold.ok_or(ProgressionError::UnboundedNotLast {
                ordinal: current.ordinal,
            })?;
            if max.checked_add(1) != Some(next.min_threshold) {
                return Err(ProgressionError::ThresholdGap {
                    ordinal: current.ordinal,
                    max_threshold: max,
                    next_ordinal: next.ordinal,
                    next_min: next.min_threshold,
                });
            }
        }

        // Non-empty was checked above
        let last = &tiers[tiers.len() - 1];
        if let Some(max) = last.max_threshold {
            return Err(ProgressionError::MissingUnboundedTier {
                ordinal: last.ordinal,
                max_threshold: max,
            });
        }

        Ok(())
    }

    /// Classify an XP value into its tier
    ///
    /// Total over all inputs:
    /// - Negative XP clamps to tier 1
    /// - XP beyond every range falls back to the highest tier
    pub fn resolve_by_experience(&self, xp: i64) -> &Tier {
        if xp < 0 {
            debug!(xp, "negative experience clamped to first tier");
            return self.first();
        }

        // Tier counts are tiny; a linear scan is enough
        match self.tiers.iter().find(|tier| tier.contains(xp)) {
            Some(tier) => tier,
            None => {
                debug!(xp, "experience outside every range, using highest tier");
                self.highest()
            }
        }
    }

    /// Look up a tier by its ordinal, `None` outside `1..=N`
    pub fn resolve_by_ordinal(&self, ordinal: i64) -> Option<&Tier> {
        if ordinal < 1 {
            return None;
        }
        let index = usize::try_from(ordinal - 1).ok()?;
        self.tiers.get(index)
    }

    /// The tier at `current_ordinal + 1`, `None` when there is no successor
    pub fn resolve_next(&self, current_ordinal: i64) -> Option<&Tier> {
        let next = current_ordinal.checked_add(1)?;
        self.resolve_by_ordinal(next)
    }

    /// Tier 1
    pub fn first(&self) -> &Tier {
        &self.tiers[0]
    }

    /// Tier N, the open-ended one
    pub fn highest(&self) -> &Tier {
        &self.tiers[self.tiers.len() - 1]
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Tiers in ascending ordinal order
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Iterate tiers in ascending ordinal order
    pub fn iter(&self) -> std::slice::Iter<'_, Tier> {
        self.tiers.iter()
    }

    /// Consume the table, returning its tiers
    pub fn into_tiers(self) -> Vec<Tier> {
        self.tiers
    }
}

impl<'a> IntoIterator for &'a TierTable {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

impl TryFrom<Vec<Tier>> for TierTable {
    type Error = ProgressionError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self> {
        Self::new(tiers)
    }
}
