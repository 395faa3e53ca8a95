//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    board::{Board, Move, Player, Position},
    lines,
};
use crate::strategy::MoveSelector;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Draw,
    OpponentWins,
    BotWins,
}

impl Outcome {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Opponent => Outcome::OpponentWins,
            Player::Bot => Outcome::BotWins,
        }
    }

    /// Numeric result code: draw 0, opponent 1, bot 2
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::OpponentWins => 1,
            Outcome::BotWins => 2,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Draw => None,
            Outcome::OpponentWins => Some(Player::Opponent),
            Outcome::BotWins => Some(Player::Bot),
        }
    }
}

/// Whether a board is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Finished(Outcome),
}

impl Status {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Finished(outcome) => Some(outcome),
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Status::Finished(_))
    }
}

/// Display labels; whoever moves first plays `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub bot: char,
    pub opponent: char,
}

impl Labels {
    pub fn for_first_player(first_player: Player) -> Self {
        match first_player {
            Player::Bot => Labels {
                bot: 'x',
                opponent: 'o',
            },
            Player::Opponent => Labels {
                bot: 'o',
                opponent: 'x',
            },
        }
    }

    pub fn of(&self, player: Player) -> char {
        match player {
            Player::Bot => self.bot,
            Player::Opponent => self.opponent,
        }
    }
}

/// Source of the opponent's moves
///
/// The returned position is validated by the game; an occupied cell is an
/// [`crate::Error::IllegalMove`] for the caller to handle.
pub trait Opponent {
    fn next_move(&mut self, board: &Board) -> crate::Result<Position>;
}

impl<F> Opponent for F
where
    F: FnMut(&Board) -> crate::Result<Position>,
{
    fn next_move(&mut self, board: &Board) -> crate::Result<Position> {
        self(board)
    }
}

/// One game in progress: the board, whose turn it is and the move history
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    first_player: Player,
    to_move: Player,
    moves: Vec<Move>,
}

impl Game {
    pub fn new(first_player: Player) -> Self {
        Game {
            board: Board::new(),
            first_player,
            to_move: first_player,
            moves: Vec::with_capacity(9),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> Status {
        lines::status(&self.board)
    }

    fn apply(&mut self, position: Position, player: Player) -> crate::Result<()> {
        if self.status().is_finished() {
            return Err(crate::Error::GameOver);
        }
        if player != self.to_move {
            return Err(crate::Error::OutOfTurn { player });
        }
        self.board = self.board.apply_move(position, player)?;
        self.moves.push(Move { position, player });
        self.to_move = player.other();
        Ok(())
    }

    /// Let the move selector play the bot's turn
    pub fn play_bot(&mut self, selector: &mut MoveSelector) -> crate::Result<Position> {
        let choice = selector.choose(&self.board)?;
        self.apply(choice.position, Player::Bot)?;
        Ok(choice.position)
    }

    /// Play the opponent's turn at `position`.
    ///
    /// # Errors
    ///
    /// [`crate::Error::OutOfTurn`] if it is the bot's turn and
    /// [`crate::Error::IllegalMove`] if the cell is occupied. The game is
    /// unchanged in both cases.
    pub fn play_opponent(&mut self, position: Position) -> crate::Result<()> {
        self.apply(position, Player::Opponent)
    }

    pub fn into_record(self) -> Option<GameRecord> {
        let outcome = self.status().outcome()?;
        Some(GameRecord {
            first_player: self.first_player,
            outcome,
            board: self.board,
            moves: self.moves,
        })
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Player,
    pub outcome: Outcome,
    pub board: Board,
    pub moves: Vec<Move>,
}

/// Play one full game between the move selector and `opponent`.
///
/// `first_player = None` tosses a coin with the selector's RNG.
///
/// # Errors
///
/// Propagates any error from the opponent, including an illegal move.
///
/// # Examples
///
/// ```
/// use noughts::{
///     strategy::MoveSelector,
///     tictactoe::{Board, Outcome, Player, play},
/// };
///
/// // An opponent that always takes the first free cell
/// let mut first_free = |board: &Board| {
///     board.unplayed_positions().first().copied().ok_or(noughts::Error::NoValidMoves)
/// };
/// let mut selector = MoveSelector::with_seed(7);
/// let record = play(&mut first_free, Some(Player::Opponent), &mut selector).unwrap();
/// assert_ne!(record.outcome, Outcome::OpponentWins);
/// ```
#[instrument(skip(opponent, selector))]
pub fn play<O>(
    opponent: &mut O,
    first_player: Option<Player>,
    selector: &mut MoveSelector,
) -> crate::Result<GameRecord>
where
    O: Opponent + ?Sized,
{
    let first_player = first_player.unwrap_or_else(|| selector.toss());
    let mut game = Game::new(first_player);

    while !game.status().is_finished() {
        match game.to_move() {
            Player::Bot => {
                game.play_bot(selector)?;
            }
            Player::Opponent => {
                let position = opponent.next_move(game.board())?;
                game.play_opponent(position)?;
            }
        }
    }

    let record = game.into_record().ok_or(crate::Error::GameOver)?;
    debug!(outcome = ?record.outcome, moves = record.moves.len(), "game finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(value: usize) -> Position {
        Position::new(value).unwrap()
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(Outcome::Draw.code(), 0);
        assert_eq!(Outcome::OpponentWins.code(), 1);
        assert_eq!(Outcome::BotWins.code(), 2);
        assert_eq!(Outcome::won_by(Player::Bot), Outcome::BotWins);
    }

    #[test]
    fn test_labels_follow_first_player() {
        assert_eq!(Labels::for_first_player(Player::Bot).bot, 'x');
        assert_eq!(Labels::for_first_player(Player::Opponent).bot, 'o');
    }

    #[test]
    fn test_game_alternates_turns() {
        let mut selector = MoveSelector::with_seed(1);
        let mut game = Game::new(Player::Opponent);
        game.play_opponent(pos(5)).unwrap();
        assert_eq!(game.to_move(), Player::Bot);
        let reply = game.play_bot(&mut selector).unwrap();
        assert_ne!(reply, pos(5));
        assert_eq!(game.to_move(), Player::Opponent);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_illegal_opponent_move_leaves_game_unchanged() {
        let mut selector = MoveSelector::with_seed(2);
        let mut game = Game::new(Player::Opponent);
        game.play_opponent(pos(1)).unwrap();
        let reply = game.play_bot(&mut selector).unwrap();
        let before = *game.board();
        let err = game.play_opponent(reply).unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { position } if position == reply.get()));
        assert_eq!(*game.board(), before);
        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.to_move(), Player::Opponent);
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut game = Game::new(Player::Bot);
        let err = game.play_opponent(pos(5)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OutOfTurn {
                player: Player::Opponent
            }
        ));
        assert_eq!(*game.board(), Board::new());

        let mut game = Game::new(Player::Opponent);
        game.play_opponent(pos(1)).unwrap();
        assert!(game.play_opponent(pos(2)).is_err());
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_play_propagates_opponent_error() {
        let mut selector = MoveSelector::with_seed(3);
        let mut always_center = |_: &Board| -> crate::Result<Position> { Ok(pos(5)) };
        let err = play(&mut always_center, Some(Player::Opponent), &mut selector).unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { position: 5 }));
    }

    #[test]
    fn test_record_requires_finished_game() {
        let game = Game::new(Player::Bot);
        assert!(game.into_record().is_none());
    }

    #[test]
    fn test_play_returns_finished_record() {
        let mut selector = MoveSelector::with_seed(4);
        let mut first_free = |board: &Board| -> crate::Result<Position> {
            board
                .unplayed_positions()
                .first()
                .copied()
                .ok_or(crate::Error::NoValidMoves)
        };
        let record = play(&mut first_free, Some(Player::Opponent), &mut selector).unwrap();
        assert_eq!(lines::status(&record.board), Status::Finished(record.outcome));
        assert_eq!(record.first_player, Player::Opponent);
        assert_eq!(record.board.occupied_count(), record.moves.len());
    }
}
