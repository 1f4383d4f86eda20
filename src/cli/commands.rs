//! Subcommand execution for codesrock-levels
//!
//! Each command writes its report to the given sink so the binary can pass
//! stdout and tests can pass a buffer.

use crate::cli::args::{Args, Commands};
use crate::cli::display;
use crate::config::LevelsConfig;
use crate::progress::ProgressSnapshot;
use crate::tiers::{Tier, TierTable};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Summary emitted by `validate --json`
#[derive(Debug, Serialize)]
struct ValidationSummary<'a> {
    valid: bool,
    tiers: usize,
    top: &'a str,
    top_min_threshold: u64,
}

/// Dispatch the parsed subcommand
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    match &args.command {
        Commands::Resolve { xp } => resolve(args, &load_table(args)?, *xp, out),
        Commands::Tier { ordinal } => show_tier(args, &load_table(args)?, *ordinal, out),
        Commands::Next { ordinal } => show_next(args, &load_table(args)?, *ordinal, out),
        Commands::Table => show_table(args, &load_table(args)?, out),
        Commands::Validate => validate(args, out),
        Commands::Init { force } => init(args, *force, out),
    }
}

/// Load and validate the ladder named by `--config`
pub fn load_table(args: &Args) -> Result<TierTable> {
    LevelsConfig::load(args.config.as_deref())
        .context("Failed to load tier config")?
        .into_table()
        .context("Tier config is invalid")
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_tier<W: Write>(args: &Args, tier: &Tier, out: &mut W) -> Result<()> {
    if args.json {
        write_json(out, tier)
    } else {
        writeln!(out, "{}", display::format_tier(tier))?;
        Ok(())
    }
}

fn resolve<W: Write>(args: &Args, table: &TierTable, xp: i64, out: &mut W) -> Result<()> {
    let snapshot = ProgressSnapshot::capture(table, xp);
    if args.json {
        write_json(out, &snapshot)
    } else {
        writeln!(out, "{}", display::format_snapshot(&snapshot))?;
        Ok(())
    }
}

fn show_tier<W: Write>(args: &Args, table: &TierTable, ordinal: i64, out: &mut W) -> Result<()> {
    match table.resolve_by_ordinal(ordinal) {
        Some(tier) => write_tier(args, tier, out),
        None => bail!("No tier with ordinal {} (ladder has 1-{})", ordinal, table.len()),
    }
}

fn show_next<W: Write>(args: &Args, table: &TierTable, ordinal: i64, out: &mut W) -> Result<()> {
    if let Some(tier) = table.resolve_next(ordinal) {
        return write_tier(args, tier, out);
    }

    if ordinal != i64::from(table.highest().ordinal) {
        bail!("No tier with ordinal {} (ladder has 1-{})", ordinal, table.len());
    }

    if args.json {
        writeln!(out, "null")?;
    } else {
        writeln!(
            out,
            "{}",
            format!("No next tier: {} is the top tier", table.highest().label).yellow()
        )?;
    }
    Ok(())
}

fn show_table<W: Write>(args: &Args, table: &TierTable, out: &mut W) -> Result<()> {
    if args.json {
        write_json(out, table.tiers())
    } else {
        writeln!(out, "{}", display::format_table(table))?;
        Ok(())
    }
}

fn validate<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let table = load_table(args)?;
    let top = table.highest();

    if args.json {
        return write_json(
            out,
            &ValidationSummary {
                valid: true,
                tiers: table.len(),
                top: &top.label,
                top_min_threshold: top.min_threshold,
            },
        );
    }

    writeln!(
        out,
        "{} {} tiers, top tier {} from {} XP",
        "✓".green().bold(),
        table.len(),
        top.label,
        top.min_threshold
    )?;
    Ok(())
}

fn init<W: Write>(args: &Args, force: bool, out: &mut W) -> Result<()> {
    let path: PathBuf = match &args.config {
        Some(p) => p.clone(),
        None => LevelsConfig::default_path()?,
    };

    if path.try_exists()? && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    LevelsConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out, "{} Wrote built-in ladder to {}", "✓".green().bold(), path.display())?;
    Ok(())
}
