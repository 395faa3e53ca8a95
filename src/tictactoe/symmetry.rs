//! Quarter-turn symmetry adapter for board detectors
//!
//! Several detectors are only written for one canonical orientation of the
//! board ("the top-left corner holds an opponent mark"). [`apply_rotated`]
//! evaluates such a detector on a rotated copy of the board and maps whatever
//! it found back into the caller's frame.

use super::board::{Board, Cell, Coord};

/// Result of a single detector evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Match {
    NoMatch,
    /// A cell, in the frame of the board the detector was given
    Coordinate(Coord),
    /// A rotation-invariant value such as the mark completing a line
    Scalar(Cell),
}

impl Match {
    pub fn scalar(self) -> Option<Cell> {
        match self {
            Match::Scalar(cell) => Some(cell),
            Match::NoMatch | Match::Coordinate(_) => None,
        }
    }

    pub fn is_match(self) -> bool {
        self != Match::NoMatch
    }

    /// `self` if it matched, otherwise the result of `f`
    pub fn or_else(self, f: impl FnOnce() -> Match) -> Match {
        if self.is_match() { self } else { f() }
    }
}

impl From<Option<Coord>> for Match {
    fn from(coord: Option<Coord>) -> Self {
        coord.map_or(Match::NoMatch, Match::Coordinate)
    }
}

impl Coord {
    /// Rotate this coordinate counter-clockwise by `turns` quarter turns
    pub fn rotated(self, turns: u8) -> Coord {
        let mut coord = self;
        for _ in 0..turns % 4 {
            coord = Coord::new(2 - coord.col, coord.row);
        }
        coord
    }
}

impl Board {
    /// Rotate the board counter-clockwise by `turns` quarter turns.
    ///
    /// The mark at `c` ends up at `c.rotated(turns)`.
    #[must_use = "rotated returns a new board; the original is unchanged"]
    pub fn rotated(&self, turns: u8) -> Board {
        let mut rows = [[Cell::Unplayed; 3]; 3];
        for coord in Board::coords() {
            let target = coord.rotated(turns);
            rows[usize::from(target.row)][usize::from(target.col)] = self.get(coord);
        }
        Board::from_rows(rows)
    }
}

/// Detector results that can be mapped from a rotated frame back to the original
pub trait Reorient {
    /// Map a result found on a board rotated by `turns` back to the unrotated frame
    fn reorient(self, turns: u8) -> Self;
}

impl Reorient for Match {
    fn reorient(self, turns: u8) -> Self {
        match self {
            Match::Coordinate(coord) => Match::Coordinate(coord.rotated((4 - turns % 4) % 4)),
            other => other,
        }
    }
}

impl Reorient for Option<Coord> {
    fn reorient(self, turns: u8) -> Self {
        self.map(|coord| coord.rotated((4 - turns % 4) % 4))
    }
}

impl Reorient for Vec<Coord> {
    fn reorient(self, turns: u8) -> Self {
        self.into_iter()
            .map(|coord| coord.rotated((4 - turns % 4) % 4))
            .collect()
    }
}

/// Evaluate `detector` on `board` rotated by `turns` and map the result back.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::{Board, Coord, Match, apply_rotated};
///
/// // "Is the top-left corner free?" asked of the board turned once
/// let top_left = |b: &Board| -> Match {
///     Some(Coord::new(0, 0)).filter(|&c| b.is_unplayed(c)).into()
/// };
/// let board = Board::from_string("B........").unwrap();
/// assert_eq!(apply_rotated(top_left, &board, 1), Match::Coordinate(Coord::new(0, 2)));
/// ```
pub fn apply_rotated<T, F>(detector: F, board: &Board, turns: u8) -> T
where
    T: Reorient,
    F: Fn(&Board) -> T,
{
    let turns = turns % 4;
    if turns == 0 {
        return detector(board);
    }
    detector(&board.rotated(turns)).reorient(turns)
}

/// Try `detector` in each of the four orientations and return the first hit
pub fn first_in_any_rotation<F>(detector: F, board: &Board) -> Option<Coord>
where
    F: Fn(&Board) -> Option<Coord>,
{
    (0..4).find_map(|turns| apply_rotated(&detector, board, turns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_turn_is_identity() {
        let board = Board::from_string("BO..B.O..").unwrap();
        assert_eq!(board.rotated(4), board);
        assert_eq!(board.rotated(1).rotated(3), board);
        for coord in Board::coords() {
            assert_eq!(coord.rotated(2).rotated(2), coord);
        }
    }

    #[test]
    fn test_quarter_turn_is_counter_clockwise() {
        // B..      ..O
        // ...  ->  ...
        // ..O      B..
        let board = Board::from_string("B.......O").unwrap();
        let turned = board.rotated(1);
        assert_eq!(turned.get(Coord::new(2, 0)), Cell::Bot);
        assert_eq!(turned.get(Coord::new(0, 2)), Cell::Opponent);
        assert_eq!(Coord::new(0, 0).rotated(1), Coord::new(2, 0));
        assert_eq!(Coord::new(0, 1).rotated(1), Coord::new(1, 0));
    }

    #[test]
    fn test_scalar_results_are_not_rotated() {
        let board = Board::from_string("B........").unwrap();
        let detector = |b: &Board| Match::Scalar(b.get(Coord::new(0, 0)));
        assert_eq!(apply_rotated(detector, &board, 0), Match::Scalar(Cell::Bot));
        assert_eq!(apply_rotated(detector, &board, 3), Match::Scalar(Cell::Unplayed));
    }

    #[test]
    fn test_coordinate_maps_back_to_same_cell() {
        // Whatever cell a detector picks on the rotated board, the reported
        // coordinate must hold the same content on the original board.
        let board = Board::from_string("BO.\n.B.\nO.O").unwrap();
        for turns in 0..4 {
            for target in Board::coords() {
                let detector = |_: &Board| Match::Coordinate(target);
                let Match::Coordinate(original) = apply_rotated(detector, &board, turns) else {
                    panic!("expected coordinate");
                };
                assert_eq!(board.get(original), board.rotated(turns).get(target));
            }
        }
    }

    #[test]
    fn test_no_match_passes_through() {
        let board = Board::new();
        assert_eq!(apply_rotated(|_| Match::NoMatch, &board, 2), Match::NoMatch);
        assert!(apply_rotated(|_| Vec::<Coord>::new(), &board, 1).is_empty());
    }

    #[test]
    fn test_first_in_any_rotation_prefers_unrotated() {
        let board = Board::from_string("B.B.....B").unwrap();
        let corner = |b: &Board| Some(Coord::new(0, 0)).filter(|&c| b.is_unplayed(c));
        assert_eq!(first_in_any_rotation(corner, &board), Some(Coord::new(2, 0)));
        assert_eq!(first_in_any_rotation(corner, &Board::new()), Some(Coord::new(0, 0)));
    }
}
