//! Terminal rendering for tiers and progress

use crate::progress::ProgressSnapshot;
use crate::tiers::{Tier, TierTable};
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 20;

/// Parse `#RRGGBB` into RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

fn accent(tier: &Tier, text: &str) -> ColoredString {
    match parse_hex_color(&tier.accent_color) {
        Some((r, g, b)) => text.truecolor(r, g, b).bold(),
        None => text.bold(),
    }
}

/// `min..=max` or `min+`
pub fn format_range(tier: &Tier) -> String {
    match tier.max_threshold {
        Some(max) => format!("{}-{} XP", tier.min_threshold, max),
        None => format!("{}+ XP", tier.min_threshold),
    }
}

/// One line describing a tier
pub fn format_tier(tier: &Tier) -> String {
    let glyph = if tier.badge_glyph.is_empty() {
        String::new()
    } else {
        format!("{} ", tier.badge_glyph)
    };
    format!(
        "{}{} {}  {}",
        glyph,
        format!("Level {}", tier.ordinal).dimmed(),
        accent(tier, &tier.label),
        format_range(tier)
    )
}

/// Text progress bar, `percent` in 0.0..=1.0
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Multi-line progress report
pub fn format_snapshot(snapshot: &ProgressSnapshot) -> String {
    let mut lines = vec![
        format!("{} {}", "XP:".bold(), snapshot.experience),
        format_tier(&snapshot.current),
        format!(
            "{} {:.0}%",
            progress_bar(snapshot.percent_through_tier),
            snapshot.percent_through_tier * 100.0
        ),
    ];

    match (&snapshot.next, snapshot.xp_to_next) {
        (Some(next), Some(needed)) => lines.push(format!(
            "{} XP to {}",
            needed.to_string().yellow(),
            accent(next, &next.label)
        )),
        _ => lines.push(format!("{}", "Top tier reached".green().bold())),
    }

    lines.join("\n")
}

/// Whole ladder, one tier per line
pub fn format_table(table: &TierTable) -> String {
    table
        .iter()
        .map(format_tier)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::codesrock_ladder;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#EAB308"), Some((0xEA, 0xB3, 0x08)));
        assert_eq!(parse_hex_color("EAB308"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_format_range() {
        let ladder = codesrock_ladder();
        assert_eq!(format_range(ladder.first()), "0-99 XP");
        assert_eq!(format_range(ladder.highest()), "1750+ XP");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(7.0), progress_bar(1.0));
    }

    #[test]
    fn test_format_snapshot_mentions_next_tier() {
        colored::control::set_override(false);
        let ladder = codesrock_ladder();
        let text = format_snapshot(&ProgressSnapshot::capture(&ladder, 120));
        assert!(text.contains("Script Scout"));
        assert!(text.contains("130 XP to Digital Creator"));

        let top = format_snapshot(&ProgressSnapshot::capture(&ladder, 2000));
        assert!(top.contains("Top tier reached"));
    }
}
