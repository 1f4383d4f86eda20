//! Command-line argument parsing for codesrock-levels
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// codesrock-levels - Inspect and validate the CodesRock XP ladder
#[derive(Parser, Debug)]
#[command(name = "codesrock-levels")]
#[command(version)]
#[command(about = "Inspect and validate the CodesRock XP tier ladder", long_about = None)]
pub struct Args {
    /// Tier config file (defaults to ~/.codesrock/levels.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (warnings), -v (info), -vv (debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an XP total and show progress to the next tier
    Resolve {
        /// Accumulated experience points
        #[arg(allow_negative_numbers = true)]
        xp: i64,
    },

    /// Show the tier with the given ordinal
    Tier {
        /// 1-based tier number
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,
    },

    /// Show the tier after the given ordinal
    Next {
        /// Current 1-based tier number
        #[arg(allow_negative_numbers = true)]
        ordinal: i64,
    },

    /// Print the whole ladder
    Table,

    /// Load the config and check the partition invariant
    Validate,

    /// Write the built-in ladder to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }
}

impl Verbosity {
    /// Default tracing filter directive when RUST_LOG is unset
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}
