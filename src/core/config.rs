//! Game configuration.
//!
//! Hosts configure a game at startup through `GameConfig`:
//! - Player names
//! - Starting coin balance
//! - RNG seed (for reproducible games)
//! - Who moves first (otherwise decided by an opening toss)
//!
//! Configs can be built in code or loaded from TOML:
//!
//! ```
//! use patolli::core::{GameConfig, PlayerColor};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     black_name = "Ana"
//!     starting_coins = 10
//!     first_player = "White"
//! "#).unwrap();
//!
//! assert_eq!(config.black_name, "Ana");
//! assert_eq!(config.white_name, "White");
//! assert_eq!(config.first_player, Some(PlayerColor::White));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::PlayerColor;
use super::error::ConfigError;
use super::player::DEFAULT_STARTING_COINS;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name of the Black player.
    pub black_name: String,

    /// Display name of the White player.
    pub white_name: String,

    /// Coins each player starts with.
    pub starting_coins: i32,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Player who rolls first. `None` decides by an opening toss.
    pub first_player: Option<PlayerColor>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            black_name: "Black".to_string(),
            white_name: "White".to_string(),
            starting_coins: DEFAULT_STARTING_COINS,
            seed: None,
            first_player: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both player names.
    #[must_use]
    pub fn with_names(mut self, black: impl Into<String>, white: impl Into<String>) -> Self {
        self.black_name = black.into();
        self.white_name = white.into();
        self
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: i32) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_first_player(mut self, color: PlayerColor) -> Self {
        self.first_player = Some(color);
        self
    }

    /// Name configured for a color.
    #[must_use]
    pub fn name_for(&self, color: PlayerColor) -> &str {
        match color {
            PlayerColor::Black => &self.black_name,
            PlayerColor::White => &self.white_name,
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.black_name.trim().is_empty() || self.white_name.trim().is_empty() {
            return Err(ConfigError::Validation("player names must not be empty".into()));
        }
        if self.black_name == self.white_name {
            return Err(ConfigError::Validation("player names must be distinct".into()));
        }
        if self.starting_coins <= 0 {
            return Err(ConfigError::Validation("starting_coins must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_coins, 20);
        assert_eq!(config.seed, None);
        assert_eq!(config.first_player, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new()
            .with_names("Ana", "Bo")
            .with_starting_coins(5)
            .with_seed(42)
            .with_first_player(PlayerColor::White);

        assert_eq!(config.name_for(PlayerColor::Black), "Ana");
        assert_eq!(config.name_for(PlayerColor::White), "Bo");
        assert_eq!(config.starting_coins, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.first_player, Some(PlayerColor::White));
    }

    #[test]
    fn test_validation_failures() {
        let config = GameConfig::new().with_starting_coins(0);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = GameConfig::new().with_names("Same", "Same");
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = GameConfig::new().with_names("  ", "Bo");
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            white_name = "Bo"
            seed = 12345
            "#,
        )
        .unwrap();

        assert_eq!(config.black_name, "Black");
        assert_eq!(config.white_name, "Bo");
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.starting_coins, 20);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            GameConfig::from_toml_str("starting_coins = -3"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("starting_coins = \"many\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_seed(1).with_first_player(PlayerColor::Black);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
