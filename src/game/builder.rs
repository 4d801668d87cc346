//! Game construction.

use crate::board::{Board, BoardLayout, CrossLayout16};
use crate::core::{ConfigError, Dice, GameConfig, GameRng, Player, PlayerColor};

use super::state::Game;

/// Builder for creating a [`Game`].
///
/// ```
/// use patolli::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .names("Ana", "Bo")
///     .starting_coins(10)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.black().name(), "Ana");
/// assert_eq!(game.white().coins(), 10);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    layout: Box<dyn BoardLayout>,
    dice: Option<Dice>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::from_config(GameConfig::default())
    }
}

impl std::fmt::Debug for GameBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameBuilder")
            .field("config", &self.config)
            .field("dice", &self.dice)
            .finish_non_exhaustive()
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            layout: Box::new(CrossLayout16),
            dice: None,
        }
    }

    pub fn names(mut self, black: impl Into<String>, white: impl Into<String>) -> Self {
        self.config = self.config.with_names(black, white);
        self
    }

    pub fn starting_coins(mut self, coins: i32) -> Self {
        self.config.starting_coins = coins;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn first_player(mut self, color: PlayerColor) -> Self {
        self.config.first_player = Some(color);
        self
    }

    /// Use a different board shape.
    pub fn layout(mut self, layout: impl BoardLayout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// Use a specific toss source instead of seeded fair coins.
    pub fn dice(mut self, dice: Dice) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Validate the configuration and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        self.config.validate()?;

        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let first = self.config.first_player.unwrap_or_else(|| {
            let mut opening = Dice::new(rng.for_context("opening"));
            let (black, white) = (opening.toss(), opening.toss());
            log::debug!("opening toss: black {} / white {}", black, white);
            if black >= white {
                PlayerColor::Black
            } else {
                PlayerColor::White
            }
        });
        let dice = self
            .dice
            .unwrap_or_else(|| Dice::new(rng.for_context("tosses")));

        let coins = self.config.starting_coins;
        let players = [
            Player::new(self.config.name_for(PlayerColor::Black), PlayerColor::Black, coins),
            Player::new(self.config.name_for(PlayerColor::White), PlayerColor::White, coins),
        ];
        let board = Board::new(self.layout.as_ref());

        Ok(Game::assemble(board, dice, players, first))
    }
}

impl Game {
    /// Build a game from a configuration on the standard cross board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        GameBuilder::from_config(config).build()
    }
}
