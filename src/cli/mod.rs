//! CLI module for codesrock-levels
//!
//! Handles command-line argument parsing, command execution, and terminal
//! rendering.

pub mod args;
pub mod commands;
pub mod display;

pub use args::{Args, Commands, Verbosity};
pub use commands::run;
