//! Tier ladder configuration
//!
//! TOML file holding a `[[tiers]]` array. Location: ~/.codesrock/levels.toml
//! A missing file means the built-in ladder; a present but malformed one is
//! rejected.

use crate::errors::{ProgressionError, Result};
use crate::tiers::{defaults::codesrock_tiers, Tier, TierTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// On-disk ladder definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelsConfig {
    #[serde(default)]
    pub tiers: Vec<Tier>,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            tiers: codesrock_tiers(),
        }
    }
}

impl LevelsConfig {
    /// Default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            ProgressionError::ConfigError("Could not determine home directory".to_string())
        })?;

        Ok(home.join(".codesrock").join("levels.toml"))
    }

    /// Parse a ladder definition from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a ladder definition from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), tiers = config.tiers.len(), "config parsed");
        Ok(config)
    }

    /// Load from `path`, or the default path when `None`
    ///
    /// Falls back to the built-in ladder when the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.try_exists()? {
            warn!(path = %path.display(), "no tier config found, using built-in ladder");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Write the definition to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        info!(path = %path.display(), "tier config written");
        Ok(())
    }

    /// Validate into a table
    pub fn into_table(self) -> Result<TierTable> {
        let table = TierTable::new(self.tiers)?;
        info!(tiers = table.len(), top = %table.highest().label, "tier table loaded");
        Ok(table)
    }
}

impl From<&TierTable> for LevelsConfig {
    fn from(table: &TierTable) -> Self {
        Self {
            tiers: table.tiers().to_vec(),
        }
    }
}
