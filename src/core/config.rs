//! Arena configuration
//!
//! Values can come from a TOML file (see `data/arena.toml`), from command line
//! flags, or from the defaults below.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};

/// Upper bound for `entropy`, which is a percentage
pub const MAX_ENTROPY: u8 = 100;

/// Configuration consumed by the game at start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of holes created by `Game::init`
    pub holes: usize,

    /// Number of moles created by `Game::init`
    ///
    /// This is also the win threshold: the game is won once this many
    /// moles are dead.
    pub moles: usize,

    /// Per-tick percentage chance that a housed mole tunnels away,
    /// and (drawn separately) that it pops its head out or ducks back in
    pub entropy: u8,

    /// Milliseconds between simulation ticks
    pub tick_ms: u64,

    /// Seed for the tick RNG. A fresh random seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            holes: 3,
            moles: 3,
            entropy: 30,
            tick_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Period of the simulation tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.holes == 0 {
            return Err(ArenaError::InvalidConfig("holes must be positive".into()));
        }

        if self.moles == 0 {
            return Err(ArenaError::InvalidConfig("moles must be positive".into()));
        }

        if self.entropy > MAX_ENTROPY {
            return Err(ArenaError::InvalidConfig(format!(
                "entropy ({}) must be at most {}",
                self.entropy, MAX_ENTROPY
            )));
        }

        if self.tick_ms == 0 {
            return Err(ArenaError::InvalidConfig("tick_ms must be positive".into()));
        }

        Ok(())
    }
}
