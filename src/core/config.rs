//! Game configuration.
//!
//! A `GameConfig` carries everything the table needs before any agent is
//! started: how many agents to seat and whether (and how) to shuffle the
//! raw card tokens. Invalid configurations are rejected by
//! [`GameConfig::validate`] before setup begins.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fewest agents a game can seat.
pub const MIN_PLAYERS: usize = 1;

/// Most agents a game can seat (one per card).
pub const MAX_PLAYERS: usize = 52;

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of agents to seat, 1 to 52.
    pub player_count: usize,

    /// Shuffle the card tokens before dealing.
    pub shuffle: bool,

    /// Seed for the shuffle. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            shuffle: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` agents, dealing in input order.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Shuffle the tokens before dealing.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Shuffle with a fixed seed. Implies `with_shuffle(true)`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = Some(seed);
        self
    }

    /// Check the player count is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bounds() {
        assert!(GameConfig::new(1).validate().is_ok());
        assert!(GameConfig::new(52).validate().is_ok());
        assert!(matches!(
            GameConfig::new(0).validate(),
            Err(ConfigError::InvalidPlayerCount(0))
        ));
        assert!(matches!(
            GameConfig::new(53).validate(),
            Err(ConfigError::InvalidPlayerCount(53))
        ));
    }

    #[test]
    fn test_with_seed_enables_shuffle() {
        let config = GameConfig::new(3).with_seed(9);
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(5).with_seed(11);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
