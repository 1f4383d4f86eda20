//! Ladder scenario tests
//!
//! Exercises the built-in CodesRock ladder through the public API.

use codesrock_levels::{codesrock_ladder, ProgressSnapshot, ProgressTracker};

#[test]
fn test_zero_xp_is_code_cadet() {
    let ladder = codesrock_ladder();
    let tier = ladder.resolve_by_experience(0);
    assert_eq!(tier.ordinal, 1);
    assert_eq!(tier.label, "Code Cadet");
}

#[test]
fn test_first_boundary_transition() {
    let ladder = codesrock_ladder();
    assert_eq!(ladder.resolve_by_experience(99).ordinal, 1);
    assert_eq!(ladder.resolve_by_experience(100).ordinal, 2);
}

#[test]
fn test_top_tier_starts_at_1750() {
    let ladder = codesrock_ladder();
    assert_eq!(ladder.resolve_by_experience(1749).ordinal, 7);
    assert_eq!(ladder.resolve_by_experience(1750).ordinal, 8);
}

#[test]
fn test_very_large_xp_is_top_tier() {
    let ladder = codesrock_ladder();
    assert_eq!(ladder.resolve_by_experience(999_999).ordinal, 8);
    assert_eq!(ladder.resolve_by_experience(i64::MAX).ordinal, 8);
}

#[test]
fn test_lookup_digital_creator() {
    let ladder = codesrock_ladder();
    let tier = ladder.resolve_by_ordinal(3).expect("tier 3 exists");
    assert_eq!(tier.label, "Digital Creator");
    assert_eq!(tier.min_threshold, 250);
    assert_eq!(tier.max_threshold, Some(449));
}

#[test]
fn test_next_tier_queries() {
    let ladder = codesrock_ladder();
    assert_eq!(ladder.resolve_next(5).map(|t| t.ordinal), Some(6));
    assert!(ladder.resolve_next(8).is_none());
}

#[test]
fn test_ordinal_lookup_out_of_range() {
    let ladder = codesrock_ladder();
    for ordinal in [-1, 0, 9, 100] {
        assert!(ladder.resolve_by_ordinal(ordinal).is_none(), "ordinal {}", ordinal);
    }
}

#[test]
fn test_every_finite_range_maps_to_its_ordinal() {
    let ladder = codesrock_ladder();
    for tier in &ladder {
        let max = tier.max_threshold.unwrap_or(tier.min_threshold + 500);
        for xp in tier.min_threshold..=max {
            assert_eq!(ladder.resolve_by_experience(xp as i64).ordinal, tier.ordinal);
        }
    }
}

#[test]
fn test_partition_contiguity() {
    let ladder = codesrock_ladder();
    for pair in ladder.tiers().windows(2) {
        assert_eq!(pair[0].max_threshold.map(|m| m + 1), Some(pair[1].min_threshold));
    }
}

#[test]
fn test_xp_needed_for_next_tier() {
    let ladder = codesrock_ladder();
    let snapshot = ProgressSnapshot::capture(&ladder, 300);
    assert_eq!(snapshot.current.label, "Digital Creator");
    assert_eq!(snapshot.xp_to_next, Some(150));
}

#[test]
fn test_student_session_progression() {
    let ladder = codesrock_ladder();
    let mut tracker = ProgressTracker::new(&ladder);

    // Ten videos at 25 XP each
    let level_ups: Vec<_> = (0..10).filter_map(|_| tracker.award(25)).collect();

    assert_eq!(tracker.experience(), 250);
    assert_eq!(level_ups.len(), 2);
    assert_eq!(level_ups[0].to.label, "Script Scout");
    assert_eq!(level_ups[1].to.label, "Digital Creator");
    assert_eq!(tracker.level_ups(), level_ups.as_slice());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let ladder = codesrock_ladder();
    let snapshot = ProgressSnapshot::capture(&ladder, 1800);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["current"]["label"], "Code Legend");
    assert!(json["current"].get("max_threshold").is_none());
    assert!(json["next"].is_null());
}
