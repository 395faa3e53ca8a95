//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Configuration for a game or exploration run.
///
/// # Examples
///
/// ```
/// use noughts::app::EngineConfig;
/// use noughts::tictactoe::Player;
///
/// let config = EngineConfig::new()
///     .with_seed(42)
///     .with_first_player(Player::Bot);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the selector's random fallback and the first-player toss
    pub seed: Option<u64>,
    /// Who moves first; `None` tosses a coin for each game
    pub first_player: Option<Player>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = Some(player);
        self
    }
}
