//! Tier ladder: data model, validated table, and the built-in CodesRock ladder
//! Classifies accumulated XP into a rank with partition guarantees

pub mod defaults;
pub mod table;
pub mod types;

pub use defaults::codesrock_ladder;
pub use table::TierTable;
pub use types::Tier;
