//! Progress reporting over a tier ladder
//! Derived views for rendering rank, progress bars, and level-up moments

pub mod tracker;
pub mod types;

pub use tracker::{award_experience, detect_level_up, ProgressTracker};
pub use types::{LevelUp, ProgressSnapshot};
