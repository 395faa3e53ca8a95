//! Move selection by fixed heuristic priority

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{forks, positional};
use crate::{
    app::EngineConfig,
    tictactoe::{Board, Coord, Player, Position, winning_move},
};

/// One rule of the move selector, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    Opening,
    Win,
    Block,
    Fork,
    BlockFork,
    Center,
    OppositeCorner,
    EmptyCorner,
    EmptySide,
}

impl Heuristic {
    /// Rules in the order they are consulted
    pub const PRIORITY: [Heuristic; 9] = [
        Heuristic::Opening,
        Heuristic::Win,
        Heuristic::Block,
        Heuristic::Fork,
        Heuristic::BlockFork,
        Heuristic::Center,
        Heuristic::OppositeCorner,
        Heuristic::EmptyCorner,
        Heuristic::EmptySide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Opening => "opening",
            Heuristic::Win => "win",
            Heuristic::Block => "block",
            Heuristic::Fork => "fork",
            Heuristic::BlockFork => "block-fork",
            Heuristic::Center => "center",
            Heuristic::OppositeCorner => "opposite-corner",
            Heuristic::EmptyCorner => "empty-corner",
            Heuristic::EmptySide => "empty-side",
        }
    }

    /// Evaluate this rule for the bot
    pub fn detect(self, board: &Board) -> Option<Coord> {
        match self {
            Heuristic::Opening => positional::opening(board),
            Heuristic::Win => winning_move(Player::Bot, board),
            Heuristic::Block => winning_move(Player::Opponent, board),
            Heuristic::Fork => forks::fork_move(Player::Bot, board),
            Heuristic::BlockFork => forks::block_fork(board),
            Heuristic::Center => positional::center(board),
            Heuristic::OppositeCorner => positional::opposite_corner(board),
            Heuristic::EmptyCorner => positional::empty_corner(board),
            Heuristic::EmptySide => positional::empty_side(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First rule in priority order that yields a move, with that move
pub fn best_heuristic_move(board: &Board) -> Option<(Heuristic, Coord)> {
    Heuristic::PRIORITY
        .iter()
        .find_map(|&rule| rule.detect(board).map(|coord| (rule, coord)))
}

/// A selected move and the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub position: Position,
    /// `None` when no rule applied and the move was drawn at random
    pub rule: Option<Heuristic>,
}

/// The bot's move selector
///
/// Deterministic except for the final fallback, which draws uniformly from
/// the unplayed cells with a seedable RNG.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: StdRng,
}

impl MoveSelector {
    /// Selector seeded from the thread RNG
    pub fn new() -> Self {
        MoveSelector {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        MoveSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Pick who moves first
    pub fn toss(&mut self) -> Player {
        if self.rng.random_bool(0.5) {
            Player::Bot
        } else {
            Player::Opponent
        }
    }

    /// Select the bot's move and report which rule chose it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is full.
    pub fn choose(&mut self, board: &Board) -> crate::Result<Choice> {
        if let Some((rule, coord)) = best_heuristic_move(board) {
            let position = coord.position();
            debug!(%rule, %position, "heuristic move");
            return Ok(Choice {
                position,
                rule: Some(rule),
            });
        }

        let coord = *board
            .unplayed()
            .choose(&mut self.rng)
            .ok_or(crate::Error::NoValidMoves)?;
        let position = coord.position();
        debug!(%position, "no heuristic applied, random move");
        Ok(Choice {
            position,
            rule: None,
        })
    }

    /// Move selector entry point: the position the bot plays on `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::{strategy::MoveSelector, tictactoe::Board};
    ///
    /// let mut selector = MoveSelector::with_seed(0);
    /// // Opening move on an empty board is the top-left corner
    /// assert_eq!(selector.pick_best_move(&Board::new()).unwrap().get(), 1);
    /// ```
    pub fn pick_best_move(&mut self, board: &Board) -> crate::Result<Position> {
        Ok(self.choose(board)?.position)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    fn chosen(s: &str) -> Choice {
        MoveSelector::with_seed(11).choose(&board(s)).unwrap()
    }

    #[test]
    fn win_beats_block() {
        // B B .
        // O O .
        // . . .
        let choice = chosen("BB.OO....");
        assert_eq!(choice.rule, Some(Heuristic::Win));
        assert_eq!(choice.position.get(), 3);
    }

    #[test]
    fn block_when_no_win() {
        // B . .
        // O O .
        // . . .
        let choice = chosen("B..OO....");
        assert_eq!(choice.rule, Some(Heuristic::Block));
        assert_eq!(choice.position.get(), 6);
    }

    #[test]
    fn first_reply_to_corner_is_center() {
        let choice = chosen("..O......");
        assert_eq!(choice.rule, Some(Heuristic::Opening));
        assert_eq!(choice.position.get(), 5);
    }

    #[test]
    fn full_board_has_no_move() {
        let mut selector = MoveSelector::with_seed(5);
        let err = selector.choose(&board("BOBBOOOBB")).unwrap_err();
        assert!(matches!(err, crate::Error::NoValidMoves));
    }

    #[test]
    fn seeded_toss_is_reproducible() {
        let mut a = MoveSelector::with_seed(99);
        let mut b = MoveSelector::with_seed(99);
        let first: Vec<Player> = (0..16).map(|_| a.toss()).collect();
        let second: Vec<Player> = (0..16).map(|_| b.toss()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn priority_order_matches_rule_list() {
        let names: Vec<&str> = Heuristic::PRIORITY.iter().map(|h| h.name()).collect();
        assert_eq!(
            names,
            [
                "opening",
                "win",
                "block",
                "fork",
                "block-fork",
                "center",
                "opposite-corner",
                "empty-corner",
                "empty-side"
            ]
        );
    }
}
