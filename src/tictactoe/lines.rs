//! Line detectors: completed lines and one-move-to-win threats
//!
//! Both detectors only look at rows and the main diagonal; the columns and
//! the anti-diagonal are covered by running the same scan on the board turned
//! once through [`apply_rotated`].

use std::iter;

use super::{
    board::{Board, Cell, Coord, Player},
    game::{Outcome, Status},
    symmetry::{Match, apply_rotated},
};

fn completed_mark(line: [Cell; 3]) -> Option<Cell> {
    (line[0] != Cell::Unplayed && line.iter().all(|&c| c == line[0])).then_some(line[0])
}

/// Mark filling a whole row (checked top to bottom) or the main diagonal
fn completed_line(board: &Board) -> Match {
    board
        .rows()
        .iter()
        .copied()
        .chain(iter::once(board.main_diagonal()))
        .find_map(completed_mark)
        .map_or(Match::NoMatch, Match::Scalar)
}

/// Terminal-state detector.
///
/// At most one player can hold a completed line when play stops, so the first
/// line found decides the winner. A full board without a line is a draw.
pub fn status(board: &Board) -> Status {
    let line = completed_line(board).or_else(|| apply_rotated(completed_line, board, 1));
    match line.scalar().and_then(Cell::player) {
        Some(player) => Status::Finished(Outcome::won_by(player)),
        None if board.is_full() => Status::Finished(Outcome::Draw),
        None => Status::InProgress,
    }
}

/// Index of the single unplayed cell in a line holding two of `player`'s marks
fn open_cell(line: [Cell; 3], player: Player) -> Option<usize> {
    let mark = player.cell();
    let marks = line.iter().filter(|&&c| c == mark).count();
    let unplayed = line.iter().filter(|&&c| c == Cell::Unplayed).count();
    if marks == 2 && unplayed == 1 {
        line.iter().position(|&c| c == Cell::Unplayed)
    } else {
        None
    }
}

fn line_threats(player: Player, board: &Board) -> Vec<Coord> {
    let mut threats: Vec<Coord> = board
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(row, cells)| {
            open_cell(*cells, player).map(|col| Coord::new(row as u8, col as u8))
        })
        .collect();
    if let Some(i) = open_cell(board.main_diagonal(), player) {
        threats.push(Coord::new(i as u8, i as u8));
    }
    threats
}

/// Every cell that would complete a line for `player`, in priority order:
/// rows, main diagonal, columns (right to left), anti-diagonal.
pub fn winning_moves(player: Player, board: &Board) -> Vec<Coord> {
    let mut moves = line_threats(player, board);
    moves.extend(apply_rotated(|b: &Board| line_threats(player, b), board, 1));
    moves
}

/// One-move-to-win detector.
///
/// With the bot as `player` this is the winning move; with the opponent it is
/// the cell the bot has to block.
pub fn winning_move(player: Player, board: &Board) -> Option<Coord> {
    winning_moves(player, board).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_status_rows_columns_diagonals() {
        assert_eq!(
            status(&board("BBB.OO...")),
            Status::Finished(Outcome::BotWins)
        );
        assert_eq!(
            status(&board(".OB.OB.O.")),
            Status::Finished(Outcome::OpponentWins)
        );
        assert_eq!(
            status(&board("BO..BO..B")),
            Status::Finished(Outcome::BotWins)
        );
        assert_eq!(
            status(&board("B.O.O.OB.")),
            Status::Finished(Outcome::OpponentWins)
        );
    }

    #[test]
    fn test_status_draw_and_in_progress() {
        assert_eq!(status(&board("BOBBOOOBB")), Status::Finished(Outcome::Draw));
        assert_eq!(status(&board("BOBBOOOB.")), Status::InProgress);
        assert_eq!(status(&Board::new()), Status::InProgress);
    }

    #[test]
    fn test_status_is_idempotent() {
        let b = board("BO.OB....");
        assert_eq!(status(&b), status(&b));
    }

    #[test]
    fn test_winning_moves_row() {
        // B.B
        // ...
        // ...
        assert_eq!(
            winning_moves(Player::Bot, &board("B.B......")),
            vec![Coord::new(0, 1)]
        );
        assert!(winning_moves(Player::Opponent, &board("B.B......")).is_empty());
    }

    #[test]
    fn test_winning_moves_order() {
        // OO.
        // O..
        // ...
        let moves = winning_moves(Player::Opponent, &board("OO.O....."));
        assert_eq!(moves, vec![Coord::new(0, 2), Coord::new(2, 0)]);
    }

    #[test]
    fn test_winning_moves_anti_diagonal() {
        let moves = winning_moves(Player::Bot, &board("..B...B.."));
        assert_eq!(moves, vec![Coord::CENTER]);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        assert!(winning_move(Player::Bot, &board("BOB......")).is_none());
        assert!(winning_move(Player::Bot, &board("B........")).is_none());
    }
}
