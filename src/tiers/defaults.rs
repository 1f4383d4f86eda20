//! Built-in CodesRock ladder

use crate::tiers::table::TierTable;
use crate::tiers::types::Tier;

/// The eight CodesRock tiers, lowest first
pub fn codesrock_tiers() -> Vec<Tier> {
    vec![
        Tier::bounded(1, "Code Cadet", 0, 99).with_display("#94A3B8", "🌱"),
        Tier::bounded(2, "Script Scout", 100, 249).with_display("#22C55E", "🧭"),
        Tier::bounded(3, "Digital Creator", 250, 449).with_display("#06B6D4", "🎨"),
        Tier::bounded(4, "Logic Builder", 450, 699).with_display("#3B82F6", "🧩"),
        Tier::bounded(5, "Algorithm Ace", 700, 999).with_display("#8B5CF6", "⚡"),
        Tier::bounded(6, "Tech Titan", 1000, 1349).with_display("#EC4899", "🛡️"),
        Tier::bounded(7, "Code Master", 1350, 1749).with_display("#F97316", "🏆"),
        Tier::unbounded(8, "Code Legend", 1750).with_display("#EAB308", "👑"),
    ]
}

/// The built-in ladder as a validated table
pub fn codesrock_ladder() -> TierTable {
    // Covered by test_builtin_ladder_is_valid
    TierTable::new(codesrock_tiers()).expect("built-in CodesRock ladder is malformed")
}
