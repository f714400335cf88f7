//! Configuration for a game.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kv_core::PlayerSpec;

use crate::error::{EngineError, EngineResult};

/// Fewest seats a game may have.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game may have.
pub const MAX_PLAYERS: usize = 8;

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for reproducible dice and cards. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Cash every player starts with.
    pub starting_balance: i64,
    /// Credit for moving past the start cell.
    pub pass_start_bonus: i64,
    /// Price of one house.
    pub house_cost: i64,
    /// Price of a hotel.
    pub hotel_cost: i64,
    /// Seats in turn order.
    pub players: Vec<PlayerSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_balance: 1500,
            pass_start_bonus: 200,
            house_cost: 50,
            hotel_cost: 200,
            players: PlayerSpec::defaults(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the seats.
    pub fn with_players(mut self, players: Vec<PlayerSpec>) -> Self {
        self.players = players;
        self
    }

    /// Set the starting balance.
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check seat count, names, and amounts.
    pub fn validate(&self) -> EngineResult<()> {
        let count = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(EngineError::InvalidConfig(format!(
                "{count} players, expected {MIN_PLAYERS} to {MAX_PLAYERS}"
            )));
        }

        let mut seen = HashSet::new();
        for spec in &self.players {
            let name = spec.name.trim();
            if name.is_empty() {
                return Err(EngineError::InvalidConfig("player name is empty".into()));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(EngineError::InvalidConfig(format!(
                    "duplicate player name \"{name}\""
                )));
            }
        }

        for (field, value) in [
            ("pass_start_bonus", self.pass_start_bonus),
            ("house_cost", self.house_cost),
            ("hotel_cost", self.hotel_cost),
        ] {
            if value < 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{field} must not be negative"
                )));
            }
        }
        Ok(())
    }
}
