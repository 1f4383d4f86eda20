//! Error types for the CodesRock progression engine
//!
//! Table defects are detected once, when a ladder is built, and surface
//! here. Lookups never fail: fallbacks and not-found are plain values.

use thiserror::Error;

/// Main error type for tier tables and their configuration
#[derive(Error, Debug)]
pub enum ProgressionError {
    /// A ladder needs at least one tier
    #[error("Tier table is empty")]
    EmptyTable,

    /// Ordinals must run 1, 2, 3, ... without gaps
    #[error("Tier at position {position} has ordinal {found}, expected {expected}")]
    NonContiguousOrdinal {
        position: usize,
        expected: u32,
        found: u32,
    },

    /// The lowest tier must start at zero XP
    #[error("First tier starts at {min_threshold} XP, expected 0")]
    FirstTierNotZero { min_threshold: u64 },

    /// Adjacent tiers must touch without gap or overlap
    #[error("Tier {ordinal} ends at {max_threshold} but tier {next_ordinal} starts at {next_min}")]
    ThresholdGap {
        ordinal: u32,
        max_threshold: u64,
        next_ordinal: u32,
        next_min: u64,
    },

    /// A finite range whose upper bound sits below its lower bound
    #[error("Tier {ordinal} has inverted range {min_threshold}..={max_threshold}")]
    InvertedRange {
        ordinal: u32,
        min_threshold: u64,
        max_threshold: u64,
    },

    /// Only the highest tier may be open-ended
    #[error("Tier {ordinal} has no upper bound but is not the highest tier")]
    UnboundedNotLast { ordinal: u32 },

    /// The highest tier must be open-ended
    #[error("Highest tier {ordinal} is bounded at {max_threshold} XP")]
    MissingUnboundedTier { ordinal: u32, max_threshold: u64 },

    /// Labels identify tiers in the UI and must not repeat
    #[error("Label '{label}' is used by more than one tier")]
    DuplicateLabel { label: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parse errors
    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    /// TOML write errors
    #[error("Config serialization error: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for progression operations
pub type Result<T> = std::result::Result<T, ProgressionError>;

impl ProgressionError {
    /// True for defects in the tier table itself, as opposed to I/O or parsing
    pub fn is_table_defect(&self) -> bool {
        !matches!(
            self,
            ProgressionError::IoError(_)
                | ProgressionError::ConfigParseError(_)
                | ProgressionError::ConfigSerializeError(_)
                | ProgressionError::ConfigError(_)
        )
    }
}
