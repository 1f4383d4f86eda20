//! Property tests for tier classification

use codesrock_levels::{codesrock_ladder, progress::detect_level_up};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_classification_is_monotonic(a: i64, b: i64) -> bool {
    let ladder = codesrock_ladder();
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    ladder.resolve_by_experience(low).ordinal <= ladder.resolve_by_experience(high).ordinal
}

#[quickcheck]
fn prop_resolved_tier_contains_xp(xp: u32) -> bool {
    let ladder = codesrock_ladder();
    ladder.resolve_by_experience(xp as i64).contains(xp as i64)
}

#[quickcheck]
fn prop_exactly_one_tier_contains_xp(xp: u32) -> bool {
    let ladder = codesrock_ladder();
    ladder.iter().filter(|t| t.contains(xp as i64)).count() == 1
}

#[quickcheck]
fn prop_next_tier_is_successor(ordinal: i64) -> bool {
    let ladder = codesrock_ladder();
    let n = ladder.len() as i64;
    match ladder.resolve_next(ordinal) {
        Some(tier) => i64::from(tier.ordinal) == ordinal + 1 && ordinal < n,
        None => ordinal >= n || ordinal < 0,
    }
}

#[quickcheck]
fn prop_level_up_only_when_tier_rises(before: u32, gained: u16) -> bool {
    let ladder = codesrock_ladder();
    let before = before as u64;
    let after = before + gained as u64;
    let from = ladder.resolve_by_experience(before as i64).ordinal;
    let to = ladder.resolve_by_experience(after as i64).ordinal;
    detect_level_up(&ladder, before, after).is_some() == (to > from)
}
