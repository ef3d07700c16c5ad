use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Default minimum age for voter registration.
pub const DEFAULT_MIN_VOTING_AGE: u32 = 18;

/// Election configuration, read from a TOML file such as `Election.toml`.
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    min_voting_age: u32,
}

impl Config {
    /// Load the config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse the config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Voters younger than this are refused registration.
    /// Configured via `min_voting_age`.
    pub fn min_voting_age(&self) -> u32 {
        self.min_voting_age
    }

    /// Override the minimum voting age.
    pub fn with_min_voting_age(mut self, age: u32) -> Self {
        self.min_voting_age = age;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_voting_age: DEFAULT_MIN_VOTING_AGE,
        }
    }
}
