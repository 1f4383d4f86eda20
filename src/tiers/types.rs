//! Tier type definitions

use serde::{Deserialize, Serialize};

/// One rank in the progression ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tier {
    /// 1-based rank number
    pub ordinal: u32,

    /// Display name, unique within a ladder
    pub label: String,

    /// Inclusive lower XP bound
    pub min_threshold: u64,

    /// Inclusive upper XP bound; `None` for the open-ended top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_threshold: Option<u64>,

    /// Display colour (hex string), never compared
    #[serde(default)]
    pub accent_color: String,

    /// Display glyph, never compared
    #[serde(default)]
    pub badge_glyph: String,
}

impl Tier {
    /// Create a bounded tier covering `min..=max`
    pub fn bounded(
        ordinal: u32,
        label: impl Into<String>,
        min_threshold: u64,
        max_threshold: u64,
    ) -> Self {
        Self {
            ordinal,
            label: label.into(),
            min_threshold,
            max_threshold: Some(max_threshold),
            accent_color: String::new(),
            badge_glyph: String::new(),
        }
    }

    /// Create the open-ended tier starting at `min`
    pub fn unbounded(ordinal: u32, label: impl Into<String>, min_threshold: u64) -> Self {
        Self {
            ordinal,
            label: label.into(),
            min_threshold,
            max_threshold: None,
            accent_color: String::new(),
            badge_glyph: String::new(),
        }
    }

    /// Attach display attributes
    pub fn with_display(
        mut self,
        accent_color: impl Into<String>,
        badge_glyph: impl Into<String>,
    ) -> Self {
        self.accent_color = accent_color.into();
        self.badge_glyph = badge_glyph.into();
        self
    }

    /// Whether this tier has no upper bound
    pub fn is_unbounded(&self) -> bool {
        self.max_threshold.is_none()
    }

    /// Whether `xp` falls in `[min_threshold, max_threshold]`
    pub fn contains(&self, xp: i64) -> bool {
        if xp < 0 {
            return false;
        }
        let xp = xp as u64;
        xp >= self.min_threshold && self.max_threshold.map_or(true, |max| xp <= max)
    }

    /// Number of XP values covered, `None` when open-ended
    pub fn span(&self) -> Option<u64> {
        self.max_threshold
            .map(|max| max.saturating_sub(self.min_threshold).saturating_add(1))
    }
}
